use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Output of a tax computation.
///
/// Both fields are unrounded so results stay composable; rounding to cents
/// happens only at the presentation boundary via [`TaxResult::tax_owed_rounded`],
/// [`TaxResult::effective_rate_rounded`], or the `Display` impl.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Total tax owed in the jurisdiction's currency unit.
    pub tax_owed: f64,
    /// Tax owed divided by gross income, as a percentage. 0 for a
    /// zero-income filer.
    pub effective_rate_percent: f64,
}

impl TaxResult {
    pub fn tax_owed_rounded(&self) -> f64 {
        round_half_up(self.tax_owed)
    }

    pub fn effective_rate_rounded(&self) -> f64 {
        round_half_up(self.effective_rate_percent)
    }
}

impl fmt::Display for TaxResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Estimated Tax: ${:.2}\nEffective Rate: {:.2}%",
            self.tax_owed_rounded(),
            self.effective_rate_rounded()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_rounds_to_two_decimal_places() {
        let result = TaxResult {
            tax_owed: 1700.0041,
            effective_rate_percent: 8.504999,
        };

        assert_eq!(
            result.to_string(),
            "Estimated Tax: $1700.00\nEffective Rate: 8.50%"
        );
    }

    #[test]
    fn rounded_accessors_round_to_nearest_cent() {
        let result = TaxResult {
            tax_owed: 1700.006,
            effective_rate_percent: 8.516,
        };

        assert_eq!(result.tax_owed_rounded(), 1700.01);
        assert_eq!(result.effective_rate_rounded(), 8.52);
    }
}
