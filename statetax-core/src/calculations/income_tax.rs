//! Progressive income-tax computation over a jurisdiction bracket schedule.
//!
//! This module implements the marginal-rate walk used by every jurisdiction:
//! deductions come off the top, then each bracket taxes only the slice of
//! taxable income between its own threshold and the next bracket's threshold.
//!
//! # Algorithm
//!
//! For a gross income `g`, dependents count `d`, and the schedule published
//! for the requested filing status:
//!
//! 1. `deductions = standardDeduction + personalExemption + dependentExemption × d`
//! 2. `taxable = max(0, g − deductions)`
//! 3. Walk the brackets in ascending-threshold order; for bracket `i` with
//!    lower bound `over[i]` and upper bound `over[i + 1]` (unbounded for the
//!    last tier), the slice `min(taxable, upper) − over[i]` is taxed at
//!    `rate[i]`. The walk stops at the first bracket whose lower bound the
//!    taxable income does not exceed.
//! 4. `effectiveRate = tax / g × 100`, or 0 when `g` is 0.
//!
//! Income exactly equal to a bracket's lower bound does not enter that
//! bracket (strict `>` comparison): the marginal dollar at a published
//! threshold is taxed at the lower tier's rate. Whether a jurisdiction's own
//! rule agrees should be checked against that authority's worked examples
//! before its table is added to a dataset.
//!
//! The engine is a pure function: no I/O, no logging, no mutation of its
//! inputs, and identical inputs produce bit-identical results.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use statetax_core::{
//!     FilingSchedule, FilingStatus, JurisdictionSchema, TaxBracket, compute_tax,
//! };
//!
//! let schema = JurisdictionSchema {
//!     schedules: BTreeMap::from([(
//!         FilingStatus::Single,
//!         FilingSchedule {
//!             brackets: vec![
//!                 TaxBracket { rate: 0.05, over: 0.0 },
//!                 TaxBracket { rate: 0.10, over: 5000.0 },
//!                 TaxBracket { rate: 0.15, over: 15000.0 },
//!             ],
//!             standard_deduction: 2000.0,
//!             personal_exemption: None,
//!         },
//!     )]),
//!     dependent_exemption: 0.0,
//! };
//!
//! let result = compute_tax(&schema, FilingStatus::Single, 20_000.0, 0).unwrap();
//!
//! // Taxable income 18,000: 5000 × 5% + 10,000 × 10% + 3000 × 15% = 1700.
//! assert_eq!(result.tax_owed_rounded(), 1700.00);
//! assert_eq!(result.effective_rate_rounded(), 8.50);
//! ```

use thiserror::Error;

use crate::models::{FilingStatus, JurisdictionSchema, ScheduleError, TaxResult};

/// Errors that can occur during a tax computation.
///
/// All of these are recoverable by the caller: a status reselection, a
/// "no tax data available" message, or re-validation of form input. A
/// jurisdiction lookup miss is a data-boundary concern and lives in the
/// loader crate, not here.
#[derive(Debug, Error, PartialEq)]
pub enum TaxError {
    /// The jurisdiction publishes no schedule for the requested status.
    #[error("no schedule published for filing status {0}")]
    UnsupportedFilingStatus(FilingStatus),

    /// The schedule exists but carries no bracket data.
    #[error("no bracket data for filing status {0}")]
    NoBracketData(FilingStatus),

    /// A caller-supplied number or a schedule invariant is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Computes tax owed and effective rate for one filer against one
/// jurisdiction's schema.
///
/// Negative gross income is clamped to 0 before computation: a loss year is
/// zero taxable income, never negative tax. The returned amounts are
/// unrounded; see [`TaxResult`] for the presentation-boundary helpers.
///
/// # Errors
///
/// - [`TaxError::InvalidInput`] if `gross_income` is NaN or infinite, or the
///   schedule violates its invariants (see
///   [`FilingSchedule::validate`](crate::FilingSchedule::validate)).
/// - [`TaxError::UnsupportedFilingStatus`] if the schema has no schedule for
///   `status`.
/// - [`TaxError::NoBracketData`] if the schedule's bracket list is empty.
pub fn compute_tax(
    schema: &JurisdictionSchema,
    status: FilingStatus,
    gross_income: f64,
    dependents: u32,
) -> Result<TaxResult, TaxError> {
    if !gross_income.is_finite() {
        return Err(TaxError::InvalidInput(format!(
            "gross income must be a finite number, got {gross_income}"
        )));
    }

    let schedule = schema
        .schedule(status)
        .ok_or(TaxError::UnsupportedFilingStatus(status))?;

    match schedule.validate() {
        Ok(()) => {}
        Err(ScheduleError::EmptyBrackets) => return Err(TaxError::NoBracketData(status)),
        Err(err) => return Err(TaxError::InvalidInput(err.to_string())),
    }

    let gross_income = gross_income.max(0.0);

    let deductions = schedule.standard_deduction
        + schedule.personal_exemption.unwrap_or(0.0)
        + schema.dependent_exemption * f64::from(dependents);
    let taxable_income = (gross_income - deductions).max(0.0);

    let mut tax_owed = 0.0;
    for (i, bracket) in schedule.brackets.iter().enumerate() {
        let lower_bound = bracket.over;
        let upper_bound = schedule
            .brackets
            .get(i + 1)
            .map_or(f64::INFINITY, |next| next.over);

        if taxable_income > lower_bound {
            let taxed_amount = taxable_income.min(upper_bound) - lower_bound;
            tax_owed += taxed_amount * bracket.rate;
        } else {
            // Thresholds are strictly increasing, so no later bracket can
            // apply either.
            break;
        }
    }

    let effective_rate_percent = if gross_income > 0.0 {
        tax_owed / gross_income * 100.0
    } else {
        0.0
    };

    Ok(TaxResult {
        tax_owed,
        effective_rate_percent,
    })
}
