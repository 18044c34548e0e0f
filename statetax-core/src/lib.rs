pub mod calculations;
pub mod models;

pub use calculations::income_tax::{TaxError, compute_tax};
pub use models::*;
