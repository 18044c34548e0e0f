//! Tax computation modules.
//!
//! The engine itself lives in [`income_tax`]; [`common`] holds the
//! presentation-boundary rounding helper.

pub mod common;
pub mod income_tax;

pub use income_tax::{TaxError, compute_tax};
