use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FilingSchedule, FilingStatus, ScheduleError};

/// Errors produced by [`JurisdictionSchema::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("schedule for filing status {status}: {source}")]
    Schedule {
        status: FilingStatus,
        source: ScheduleError,
    },

    #[error("dependent exemption must be a non-negative finite number, got {0}")]
    InvalidDependentExemption(f64),
}

/// Per-jurisdiction tax record: one bracket schedule per published filing
/// status, plus the per-dependent exemption.
///
/// Immutable value object, constructed once per jurisdiction by the data
/// loader and passed by reference into every engine call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionSchema {
    /// Bracket schedules keyed by filing status. Statuses the jurisdiction
    /// does not publish are simply absent.
    #[serde(rename = "incomeTax")]
    pub schedules: BTreeMap<FilingStatus, FilingSchedule>,

    /// Exemption applied per claimed dependent, defaulting to 0 when the
    /// jurisdiction does not define one.
    #[serde(rename = "dependentExemption", default)]
    pub dependent_exemption: f64,
}

impl JurisdictionSchema {
    pub fn schedule(&self, status: FilingStatus) -> Option<&FilingSchedule> {
        self.schedules.get(&status)
    }

    /// Validates every non-empty schedule plus the dependent exemption.
    ///
    /// Schedules with no bracket data are tolerated here: jurisdictions with
    /// partial coverage (or no income tax at all) are expected, and the
    /// engine reports those as `NoBracketData` at computation time.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if !self.dependent_exemption.is_finite() || self.dependent_exemption < 0.0 {
            return Err(SchemaError::InvalidDependentExemption(
                self.dependent_exemption,
            ));
        }

        for (&status, schedule) in &self.schedules {
            match schedule.validate() {
                Ok(()) | Err(ScheduleError::EmptyBrackets) => {}
                Err(source) => return Err(SchemaError::Schedule { status, source }),
            }
        }

        Ok(())
    }
}
