use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Serialize, Deserialize};
use std::ops::{Add, Mul};

/// Dense row-major matrix.
///
/// Column vectors are `n × 1` matrices. A mini-batch is stored with one
/// sample per column, so a layer's weight matrix (`out × in`) multiplies a
/// whole batch at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows must all have the same length"
        );
        Matrix { rows, cols, data }
    }

    /// Builds an `n × 1` column vector.
    pub fn column(values: &[f64]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.iter().map(|&v| vec![v]).collect(),
        }
    }

    /// Stacks equal-length slices side by side, one slice per column.
    pub fn column_stack(columns: &[&[f64]]) -> Matrix {
        let rows = columns.first().map_or(0, |c| c.len());
        assert!(
            columns.iter().all(|c| c.len() == rows),
            "column_stack requires columns of equal length"
        );
        let mut res = Matrix::zeros(rows, columns.len());
        for (j, col) in columns.iter().enumerate() {
            for (i, &v) in col.iter().enumerate() {
                res.data[i][j] = v;
            }
        }
        res
    }

    /// Samples every entry from N(0, std_dev²).
    ///
    /// `std_dev = 1 / sqrt(fan_in)` gives the scaled initialization used for
    /// sigmoid layers; `std_dev = 1` gives plain standard-normal biases.
    pub fn random_normal<R: Rng + ?Sized>(rows: usize, cols: usize, std_dev: f64, rng: &mut R) -> Matrix {
        let normal = Normal::new(0.0, std_dev)
            .unwrap_or_else(|_| panic!("invalid standard deviation {std_dev}"));
        let mut res = Matrix::zeros(rows, cols);
        for row in res.data.iter_mut() {
            for x in row.iter_mut() {
                *x = normal.sample(rng);
            }
        }
        res
    }

    /// Whether `data` really holds `rows` rows of `cols` values each.
    ///
    /// Always true for matrices built here; a deserialized matrix can
    /// disagree with its own `rows` / `cols` fields.
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == self.rows && self.data.iter().all(|row| row.len() == self.cols)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Combines two same-shape matrices element by element.
    pub fn zip_map<F>(&self, other: &Matrix, functor: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(self.shape(), other.shape(), "Matrices are of incorrect sizes");
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(other.data.iter())
                .map(|(row_a, row_b)| {
                    row_a.iter().zip(row_b.iter()).map(|(&a, &b)| functor(a, b)).collect()
                })
                .collect(),
        }
    }

    /// Element-wise (Hadamard) product.
    pub fn hadamard(&self, other: &Matrix) -> Matrix {
        self.zip_map(other, |a, b| a * b)
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    pub fn matmul(&self, rhs: &Matrix) -> Matrix {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }

    /// Adds the column vector `column` to every column of `self`.
    ///
    /// Only an exact `rows × 1` column is accepted; anything else panics
    /// instead of broadcasting.
    pub fn add_column(&self, column: &Matrix) -> Matrix {
        if column.cols != 1 || column.rows != self.rows {
            panic!("Matrices are of incorrect sizes")
        }
        let mut res = self.clone();
        for (row, bias) in res.data.iter_mut().zip(column.data.iter()) {
            for x in row.iter_mut() {
                *x += bias[0];
            }
        }
        res
    }

    /// Mean of each row, as a column vector.
    pub fn row_means(&self) -> Matrix {
        let n = self.cols as f64;
        Matrix {
            rows: self.rows,
            cols: 1,
            data: self.data.iter().map(|row| vec![row.iter().sum::<f64>() / n]).collect(),
        }
    }

    pub fn column_values(&self, j: usize) -> Vec<f64> {
        self.data.iter().map(|row| row[j]).collect()
    }

    /// Row index of the largest entry in column `j`; the first one wins on ties.
    pub fn argmax_column(&self, j: usize) -> usize {
        argmax(&self.column_values(j))
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().flatten().sum()
    }

    pub fn values(&self) -> impl Iterator<Item = &f64> {
        self.data.iter().flatten()
    }
}

/// Index of the maximum element in a slice.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &x)| match best {
            Some((_, b)) if b >= x => best,
            _ => Some((i, x)),
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }
        self.zip_map(&rhs, |a, b| a + b)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        self.matmul(&rhs)
    }
}
