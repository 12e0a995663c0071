use super::plateau::{PlateauAction, PlateauTracker};

/// Signals the end of training once held-out accuracy has not improved for
/// `patience` epochs. The signal is sticky.
#[derive(Debug, Clone)]
pub struct EarlyStopping {
    tracker: PlateauTracker,
}

impl EarlyStopping {
    pub fn new(patience: usize) -> EarlyStopping {
        EarlyStopping { tracker: PlateauTracker::new(patience, PlateauAction::Stop) }
    }

    pub fn should_stop(&mut self, accuracy: usize) -> bool {
        self.tracker.observe(accuracy)
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

impl Default for EarlyStopping {
    fn default() -> Self {
        EarlyStopping::new(10)
    }
}
