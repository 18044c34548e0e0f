use serde::{Deserialize, Serialize};

/// One marginal tier of a bracket schedule.
///
/// `rate` applies only to the slice of taxable income above `over`, up to the
/// next tier's `over` (or without limit for the last tier). Field names match
/// the serialized schema shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Marginal rate as a fraction, e.g. 0.0625 for 6.25%.
    pub rate: f64,
    /// Taxable income level at which this rate begins applying.
    pub over: f64,
}
