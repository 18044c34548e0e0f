use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors produced by [`FilingSchedule::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    /// The bracket list is empty or absent.
    #[error("schedule has no bracket data")]
    EmptyBrackets,

    /// A bracket rate is outside [0, 1] or not a number.
    #[error("bracket rate must be between 0 and 1, got {0}")]
    RateOutOfRange(f64),

    /// A bracket threshold is NaN or infinite.
    #[error("bracket threshold must be a finite number, got {0}")]
    NonFiniteThreshold(f64),

    /// The first bracket does not start at 0.
    #[error("first bracket must start at 0, got {0}")]
    FloorNotZero(f64),

    /// Thresholds are not strictly increasing.
    #[error("bracket thresholds must be strictly increasing, got {0} followed by {1}")]
    ThresholdNotIncreasing(f64, f64),

    #[error("standard deduction must be a non-negative finite number, got {0}")]
    InvalidStandardDeduction(f64),

    #[error("personal exemption must be a non-negative finite number, got {0}")]
    InvalidPersonalExemption(f64),
}

/// The bracket table and allowances for one filing status within one
/// jurisdiction.
///
/// Bracket order is semantically load-bearing: the marginal walk in
/// [`compute_tax`](crate::compute_tax) relies on ascending thresholds.
/// A missing `standardDeduction` deserializes to 0 and a missing or `null`
/// `personalExemption` to `None`, mirroring the source documents, which omit
/// allowances a jurisdiction does not define.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingSchedule {
    pub brackets: Vec<TaxBracket>,

    #[serde(rename = "standardDeduction", default)]
    pub standard_deduction: f64,

    #[serde(rename = "personalExemption", default)]
    pub personal_exemption: Option<f64>,
}

impl FilingSchedule {
    /// Checks the schedule invariants: rates within [0, 1], finite
    /// thresholds, a zero floor, strictly increasing thresholds, and
    /// non-negative allowances.
    ///
    /// An empty bracket list is reported as [`ScheduleError::EmptyBrackets`]
    /// rather than silently accepted; callers decide whether that is a hard
    /// failure (engine) or expected partial data (loader).
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let Some(first) = self.brackets.first() else {
            return Err(ScheduleError::EmptyBrackets);
        };

        for bracket in &self.brackets {
            if !(0.0..=1.0).contains(&bracket.rate) {
                return Err(ScheduleError::RateOutOfRange(bracket.rate));
            }
            if !bracket.over.is_finite() {
                return Err(ScheduleError::NonFiniteThreshold(bracket.over));
            }
        }

        if first.over != 0.0 {
            return Err(ScheduleError::FloorNotZero(first.over));
        }

        for pair in self.brackets.windows(2) {
            if pair[1].over <= pair[0].over {
                return Err(ScheduleError::ThresholdNotIncreasing(
                    pair[0].over,
                    pair[1].over,
                ));
            }
        }

        if !self.standard_deduction.is_finite() || self.standard_deduction < 0.0 {
            return Err(ScheduleError::InvalidStandardDeduction(
                self.standard_deduction,
            ));
        }

        if let Some(exemption) = self.personal_exemption
            && (!exemption.is_finite() || exemption < 0.0)
        {
            return Err(ScheduleError::InvalidPersonalExemption(exemption));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_schedule() -> FilingSchedule {
        FilingSchedule {
            brackets: vec![
                TaxBracket { rate: 0.05, over: 0.0 },
                TaxBracket { rate: 0.10, over: 5000.0 },
                TaxBracket { rate: 0.15, over: 15000.0 },
            ],
            standard_deduction: 2000.0,
            personal_exemption: Some(1000.0),
        }
    }

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_valid_schedule() {
        let schedule = test_schedule();

        assert_eq!(schedule.validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_single_flat_bracket() {
        let schedule = FilingSchedule {
            brackets: vec![TaxBracket { rate: 0.05, over: 0.0 }],
            standard_deduction: 0.0,
            personal_exemption: None,
        };

        assert_eq!(schedule.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_brackets() {
        let schedule = FilingSchedule {
            brackets: vec![],
            standard_deduction: 0.0,
            personal_exemption: None,
        };

        assert_eq!(schedule.validate(), Err(ScheduleError::EmptyBrackets));
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let schedule = FilingSchedule {
            brackets: vec![TaxBracket { rate: 1.5, over: 0.0 }],
            ..test_schedule()
        };

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::RateOutOfRange(1.5))
        );
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let schedule = FilingSchedule {
            brackets: vec![TaxBracket { rate: -0.05, over: 0.0 }],
            ..test_schedule()
        };

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::RateOutOfRange(-0.05))
        );
    }

    #[test]
    fn validate_rejects_nan_rate() {
        let schedule = FilingSchedule {
            brackets: vec![TaxBracket { rate: f64::NAN, over: 0.0 }],
            ..test_schedule()
        };

        // NaN fails the range containment check rather than slipping through
        // both comparisons.
        assert!(matches!(
            schedule.validate(),
            Err(ScheduleError::RateOutOfRange(_))
        ));
    }

    #[test]
    fn validate_rejects_infinite_threshold() {
        let schedule = FilingSchedule {
            brackets: vec![
                TaxBracket { rate: 0.05, over: 0.0 },
                TaxBracket { rate: 0.10, over: f64::INFINITY },
            ],
            ..test_schedule()
        };

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::NonFiniteThreshold(f64::INFINITY))
        );
    }

    #[test]
    fn validate_rejects_nonzero_floor() {
        let schedule = FilingSchedule {
            brackets: vec![TaxBracket { rate: 0.05, over: 100.0 }],
            ..test_schedule()
        };

        assert_eq!(schedule.validate(), Err(ScheduleError::FloorNotZero(100.0)));
    }

    #[test]
    fn validate_rejects_duplicate_thresholds() {
        let schedule = FilingSchedule {
            brackets: vec![
                TaxBracket { rate: 0.05, over: 0.0 },
                TaxBracket { rate: 0.10, over: 5000.0 },
                TaxBracket { rate: 0.15, over: 5000.0 },
            ],
            ..test_schedule()
        };

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::ThresholdNotIncreasing(5000.0, 5000.0))
        );
    }

    #[test]
    fn validate_rejects_descending_thresholds() {
        let schedule = FilingSchedule {
            brackets: vec![
                TaxBracket { rate: 0.05, over: 0.0 },
                TaxBracket { rate: 0.10, over: 9000.0 },
                TaxBracket { rate: 0.15, over: 5000.0 },
            ],
            ..test_schedule()
        };

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::ThresholdNotIncreasing(9000.0, 5000.0))
        );
    }

    #[test]
    fn validate_rejects_negative_standard_deduction() {
        let schedule = FilingSchedule {
            standard_deduction: -500.0,
            ..test_schedule()
        };

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::InvalidStandardDeduction(-500.0))
        );
    }

    #[test]
    fn validate_rejects_negative_personal_exemption() {
        let schedule = FilingSchedule {
            personal_exemption: Some(-100.0),
            ..test_schedule()
        };

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::InvalidPersonalExemption(-100.0))
        );
    }

    #[test]
    fn validate_accepts_absent_personal_exemption() {
        let schedule = FilingSchedule {
            personal_exemption: None,
            ..test_schedule()
        };

        assert_eq!(schedule.validate(), Ok(()));
    }

    // =========================================================================
    // serde shape tests
    // =========================================================================

    #[test]
    fn deserializes_full_schedule() {
        let json = r#"{
            "brackets": [
                { "rate": 0.05, "over": 0 },
                { "rate": 0.10, "over": 5000 }
            ],
            "standardDeduction": 2000,
            "personalExemption": 1000
        }"#;

        let schedule: FilingSchedule = serde_json::from_str(json).unwrap();

        assert_eq!(schedule.brackets.len(), 2);
        assert_eq!(schedule.standard_deduction, 2000.0);
        assert_eq!(schedule.personal_exemption, Some(1000.0));
    }

    #[test]
    fn missing_deduction_and_exemption_default_to_absent() {
        let json = r#"{ "brackets": [ { "rate": 0.05, "over": 0 } ] }"#;

        let schedule: FilingSchedule = serde_json::from_str(json).unwrap();

        assert_eq!(schedule.standard_deduction, 0.0);
        assert_eq!(schedule.personal_exemption, None);
    }

    #[test]
    fn null_personal_exemption_deserializes_to_none() {
        let json = r#"{
            "brackets": [ { "rate": 0.05, "over": 0 } ],
            "personalExemption": null
        }"#;

        let schedule: FilingSchedule = serde_json::from_str(json).unwrap();

        assert_eq!(schedule.personal_exemption, None);
    }
}
