use serde::{Serialize, Deserialize};

/// What a tracker does once accuracy has stalled for `patience` epochs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateauAction {
    /// Reset the counter and report; the caller halves the learning rate
    /// and keeps going.
    Halve,
    /// Report and keep reporting on every later call.
    Stop,
}

/// Patience-counting state machine shared by the learning-rate schedule
/// and early stopping.
#[derive(Debug, Clone)]
pub struct PlateauTracker {
    patience: usize,
    action: PlateauAction,
    best_accuracy: usize,
    counter: usize,
    triggered: u32,
    history: Vec<usize>,
}

impl PlateauTracker {
    pub fn new(patience: usize, action: PlateauAction) -> PlateauTracker {
        PlateauTracker {
            patience,
            action,
            best_accuracy: 0,
            counter: 0,
            triggered: 0,
            history: Vec::new(),
        }
    }

    /// Feeds one epoch's accuracy. Returns `true` when the plateau action fires.
    pub fn observe(&mut self, accuracy: usize) -> bool {
        self.history.push(accuracy);
        if accuracy > self.best_accuracy {
            self.best_accuracy = accuracy;
            self.counter = 0;
        } else {
            self.counter += 1;
        }

        if self.counter < self.patience {
            return false;
        }
        match self.action {
            PlateauAction::Halve => {
                self.counter = 0;
                self.triggered += 1;
            }
            PlateauAction::Stop => {
                self.triggered = 1;
            }
        }
        true
    }

    pub fn best_accuracy(&self) -> usize {
        self.best_accuracy
    }

    /// Epochs since the last improvement (or since the last halving).
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Number of times the action has fired.
    pub fn triggered(&self) -> u32 {
        self.triggered
    }

    /// Every accuracy observed so far, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }
}
