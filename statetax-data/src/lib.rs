pub mod loader;

pub use loader::{DatasetError, TaxDataset};
