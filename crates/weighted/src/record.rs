use std::str::FromStr;

use crate::error::RecordError;

/// A record type that can be built from the payload fields of one input line.
///
/// The weight field has already been stripped when
/// [`from_fields`](DataFileRecord::from_fields) is called, so `fields` holds
/// exactly the record's own columns.
pub trait DataFileRecord: Sized {
    /// Number of payload fields a well-formed line carries.
    const FIELD_COUNT: usize;

    fn from_fields(fields: &[String]) -> Result<Self, RecordError>;
}

/// Rejects `fields` unless it has exactly `T::FIELD_COUNT` entries.
pub fn check_field_count<T: DataFileRecord>(fields: &[String]) -> Result<(), RecordError> {
    if fields.len() != T::FIELD_COUNT {
        return Err(RecordError::FieldCountMismatch {
            expected: T::FIELD_COUNT,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Parses a numeric column, naming the column on failure.
pub fn parse_field<N: FromStr>(field: &'static str, value: &str) -> Result<N, RecordError> {
    value
        .trim()
        .parse()
        .map_err(|_| RecordError::InvalidField {
            field,
            value: value.to_string(),
        })
}

/// Copies a text column, rejecting values longer than `max_len` characters.
pub fn bounded_string(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<String, RecordError> {
    if value.chars().count() > max_len {
        return Err(RecordError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}
