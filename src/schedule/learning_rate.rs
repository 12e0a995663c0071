use super::plateau::{PlateauAction, PlateauTracker};

/// Halves the learning rate when held-out accuracy stops improving.
///
/// The tracker only counts halvings; the training loop divides η and
/// enforces the cap on how many halvings a run may take.
#[derive(Debug, Clone)]
pub struct LearningRate {
    tracker: PlateauTracker,
}

impl LearningRate {
    pub fn new(patience: usize) -> LearningRate {
        LearningRate { tracker: PlateauTracker::new(patience, PlateauAction::Halve) }
    }

    pub fn should_halve(&mut self, accuracy: usize) -> bool {
        self.tracker.observe(accuracy)
    }

    pub fn num_halves(&self) -> u32 {
        self.tracker.triggered()
    }

    pub fn best_accuracy(&self) -> usize {
        self.tracker.best_accuracy()
    }

    pub fn counter(&self) -> usize {
        self.tracker.counter()
    }

    pub fn history(&self) -> &[usize] {
        self.tracker.history()
    }
}

impl Default for LearningRate {
    fn default() -> Self {
        LearningRate::new(10)
    }
}
