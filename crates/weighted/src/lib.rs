//! # Weighted
//!
//! An immutable, in-memory store for weighted text records.
//!
//! Input lines look like `weight<TAB>field<TAB>field...`. The store keeps
//! every record once, plus a *weighted index*: record `i` with weight `w`
//! contributes `w` copies of `i`. Picking a uniform position in the index
//! therefore picks records in proportion to their weight, in O(1), at the
//! cost of memory proportional to the total weight.
//!
//! ## Example
//! ```rust
//! use weighted::{check_field_count, DataFileRecord, RecordError, SizeFilter, WeightedDataFile};
//!
//! struct Name(String);
//!
//! impl DataFileRecord for Name {
//!     const FIELD_COUNT: usize = 1;
//!
//!     fn from_fields(fields: &[String]) -> Result<Self, RecordError> {
//!         check_field_count::<Self>(fields)?;
//!         Ok(Name(fields[0].clone()))
//!     }
//! }
//!
//! let wdf: WeightedDataFile<Name> =
//!     WeightedDataFile::from_reader("3\tA\n0\tB\n1\tC\n".as_bytes()).unwrap();
//! assert_eq!(wdf.size(SizeFilter::AllRecords), 4);
//! assert_eq!(wdf.size(SizeFilter::UniqueRecordsOnly), 3);
//! assert_eq!(wdf[3].0, "C");
//! assert_eq!(wdf.unique_record(1).0, "B"); // weight 0: unique access only
//! ```

mod error;
mod record;
mod store;

pub use error::{DataFileError, RecordError};
pub use record::{bounded_string, check_field_count, parse_field, DataFileRecord};
pub use splitter::{FieldSource, TextSplitter};
pub use store::{SizeFilter, WeightedDataFile};
