mod filing_status;
mod jurisdiction;
mod schedule;
mod tax_bracket;
mod tax_result;

pub use filing_status::FilingStatus;
pub use jurisdiction::{JurisdictionSchema, SchemaError};
pub use schedule::{FilingSchedule, ScheduleError};
pub use tax_bracket::TaxBracket;
pub use tax_result::TaxResult;
