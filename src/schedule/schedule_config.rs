use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// Which plateau policy ends (or slows) a training run.
///
/// ```json
/// { "kind": "halve_on_plateau", "patience": 10, "max_halvings": 7 }
/// { "kind": "early_stopping", "patience": 10 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleConfig {
    /// Halve η after `patience` stalled epochs; stop once η has been halved
    /// `max_halvings` times.
    HalveOnPlateau { patience: usize, max_halvings: u32 },
    /// Keep η fixed and stop after `patience` stalled epochs.
    EarlyStopping { patience: usize },
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig::HalveOnPlateau { patience: 10, max_halvings: 7 }
    }
}

impl ScheduleConfig {
    pub fn patience(&self) -> usize {
        match *self {
            ScheduleConfig::HalveOnPlateau { patience, .. } => patience,
            ScheduleConfig::EarlyStopping { patience } => patience,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.patience() == 0 {
            return Err(Error::InvalidConfig("patience must be at least 1".to_owned()));
        }
        if let ScheduleConfig::HalveOnPlateau { max_halvings: 0, .. } = self {
            return Err(Error::InvalidConfig("max_halvings must be at least 1".to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_json() {
        let s: ScheduleConfig =
            serde_json::from_str(r#"{"kind":"halve_on_plateau","patience":4,"max_halvings":3}"#).unwrap();
        assert_eq!(s, ScheduleConfig::HalveOnPlateau { patience: 4, max_halvings: 3 });
        let e: ScheduleConfig = serde_json::from_str(r#"{"kind":"early_stopping","patience":2}"#).unwrap();
        assert_eq!(e.patience(), 2);
    }

    #[test]
    fn zero_bounds_are_rejected() {
        assert!(ScheduleConfig::HalveOnPlateau { patience: 3, max_halvings: 0 }.validate().is_err());
        assert!(ScheduleConfig::EarlyStopping { patience: 0 }.validate().is_err());
        assert!(ScheduleConfig::default().validate().is_ok());
    }
}
