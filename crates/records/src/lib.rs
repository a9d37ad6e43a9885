//! Concrete record types for weighted data files.
//!
//! Each type implements [`weighted::DataFileRecord`], so it can be loaded
//! with [`weighted::WeightedDataFile`]. Records are plain values: once built
//! they are only read, and [`to_delimited`](ExchangeDataFileRecord::to_delimited)
//! writes them back in their input layout (without the weight).

mod exchange;
mod zip_code;

pub use exchange::ExchangeDataFileRecord;
pub use zip_code::ZipCodeDataFileRecord;
