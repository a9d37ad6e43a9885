use rand::Rng;
use splitter::{FieldSource, TextSplitter};
use std::fs::File;
use std::io::Read;
use std::ops::Index;
use std::path::Path;
use tracing::debug;

use crate::error::DataFileError;
use crate::record::DataFileRecord;

/// Selects which sequence [`WeightedDataFile::size`] measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeFilter {
    /// Total weight: the length of the weighted index sequence.
    #[default]
    AllRecords,
    /// Number of records ingested, regardless of weight.
    UniqueRecordsOnly,
}

/// An immutable set of weighted records with O(1) weight-proportional access.
///
/// Construction drains a [`FieldSource`] once. Every non-blank line carries a
/// leading integer weight followed by the record's fields. The store keeps:
///
/// - `records`: each parsed record once, in input order.
/// - `weighted_indexes`: for the record at ordinal `i` with weight `w`, the
///   value `i` repeated `w` times. Runs are contiguous and ascending, and the
///   sequence length is the sum of all weights.
///
/// Weighted access resolves a position through `weighted_indexes` and then
/// into `records`, so drawing a uniform position in `[0, len())` yields
/// records with frequency proportional to their weight.
///
/// A weight of `0` is legal: the record is reachable through
/// [`unique_record`](Self::unique_record) but never through weighted access.
///
/// Both sequences are boxed slices once built; nothing mutates them, so a
/// store can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct WeightedDataFile<T> {
    records: Box<[T]>,
    weighted_indexes: Box<[usize]>,
}

impl<T: DataFileRecord> WeightedDataFile<T> {
    /// Builds the store from every record `source` produces.
    ///
    /// Blank lines (a single empty field) are skipped without consuming an
    /// ordinal.
    ///
    /// # Errors
    ///
    /// The first failure aborts the build and no store is returned:
    ///
    /// - [`DataFileError::MalformedWeight`] if field 0 is not a base-10
    ///   integer in `0..=u32::MAX`.
    /// - [`DataFileError::CapacityExceeded`] if the index cannot grow by the
    ///   record's weight.
    /// - [`DataFileError::FieldCountMismatch`] / [`DataFileError::InvalidField`]
    ///   if the record factory rejects the remaining fields.
    /// - [`DataFileError::Io`] if the source fails to read.
    pub fn from_source<S: FieldSource + ?Sized>(source: &mut S) -> Result<Self, DataFileError> {
        let mut records = Vec::new();
        let mut weighted_indexes = Vec::new();
        let mut line = 0usize;
        let mut blank_lines = 0usize;

        // exhaustion is only known after reading past the end
        let mut fields = source.next_record()?;
        while !source.is_exhausted() {
            line += 1;

            if fields.len() == 1 && fields[0].is_empty() {
                blank_lines += 1;
                fields = source.next_record()?;
                continue;
            }

            let (weight, payload) = match fields.split_first() {
                Some((w, rest)) => (parse_weight(w, line)?, rest),
                None => {
                    return Err(DataFileError::MalformedWeight {
                        line,
                        value: String::new(),
                    })
                }
            };

            let record = T::from_fields(payload).map_err(|e| e.at_line(line))?;
            let ordinal = records.len();

            let capacity_exceeded = || DataFileError::CapacityExceeded { line, weight };
            weighted_indexes
                .len()
                .checked_add(weight)
                .ok_or_else(capacity_exceeded)?;
            weighted_indexes
                .try_reserve(weight)
                .map_err(|_| capacity_exceeded())?;

            records.push(record);
            weighted_indexes.extend(std::iter::repeat(ordinal).take(weight));

            fields = source.next_record()?;
        }

        debug!(
            records = records.len(),
            total_weight = weighted_indexes.len(),
            blank_lines,
            "weighted data file loaded"
        );

        // into_boxed_slice drops any spare capacity
        Ok(Self {
            records: records.into_boxed_slice(),
            weighted_indexes: weighted_indexes.into_boxed_slice(),
        })
    }

    /// Builds the store from any reader of tab-delimited lines.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataFileError> {
        Self::from_source(&mut TextSplitter::from_reader(reader))
    }

    /// Opens and loads a tab-delimited weighted data file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DataFileError> {
        let mut splitter: TextSplitter<File> = TextSplitter::open(path)?;
        Self::from_source(&mut splitter)
    }
}

impl<T> WeightedDataFile<T> {
    /// Returns the total weight (`AllRecords`) or the record count
    /// (`UniqueRecordsOnly`).
    pub fn size(&self, filter: SizeFilter) -> usize {
        match filter {
            SizeFilter::AllRecords => self.weighted_indexes.len(),
            SizeFilter::UniqueRecordsOnly => self.records.len(),
        }
    }

    /// Total weight; the valid range for weighted access is `0..len()`.
    pub fn len(&self) -> usize {
        self.size(SizeFilter::AllRecords)
    }

    /// Number of records ingested, including zero-weight ones.
    pub fn unique_len(&self) -> usize {
        self.size(SizeFilter::UniqueRecordsOnly)
    }

    /// Returns `true` if no record is reachable through weighted access.
    pub fn is_empty(&self) -> bool {
        self.weighted_indexes.is_empty()
    }

    /// Weighted access without a recoverable range check.
    ///
    /// # Panics
    ///
    /// Panics if `weighted_index >= len()`.
    pub fn weighted(&self, weighted_index: usize) -> &T {
        &self.records[self.weighted_indexes[weighted_index]]
    }

    /// Range-checked weighted access.
    pub fn at(&self, weighted_index: usize) -> Result<&T, DataFileError> {
        self.weighted_indexes
            .get(weighted_index)
            .map(|&ordinal| &self.records[ordinal])
            .ok_or(DataFileError::IndexOutOfRange {
                index: weighted_index,
                len: self.weighted_indexes.len(),
            })
    }

    /// Returns the record at ordinal `idx`, bypassing the weights.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= unique_len()`.
    pub fn unique_record(&self, idx: usize) -> &T {
        &self.records[idx]
    }

    /// Range-checked [`unique_record`](Self::unique_record).
    pub fn unique_record_checked(&self, idx: usize) -> Result<&T, DataFileError> {
        self.records.get(idx).ok_or(DataFileError::IndexOutOfRange {
            index: idx,
            len: self.records.len(),
        })
    }

    /// Draws one record with probability proportional to its weight.
    ///
    /// Returns `None` when the total weight is zero.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        if self.weighted_indexes.is_empty() {
            return None;
        }
        Some(self.weighted(rng.gen_range(0..self.weighted_indexes.len())))
    }

    /// Declared weight of the record at `ordinal`, or `None` if out of range.
    pub fn weight_of(&self, ordinal: usize) -> Option<usize> {
        if ordinal >= self.records.len() {
            return None;
        }
        let start = self.weighted_indexes.partition_point(|&i| i < ordinal);
        let end = self.weighted_indexes.partition_point(|&i| i <= ordinal);
        Some(end - start)
    }

    /// Unique records in input order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// The weighted index sequence (ordinals into [`records`](Self::records)).
    pub fn weighted_indexes(&self) -> &[usize] {
        &self.weighted_indexes
    }

    /// Records in input order, each exactly once.
    pub fn iter_unique(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    /// Records in weighted order, each repeated by its weight.
    pub fn iter_weighted(&self) -> impl Iterator<Item = &T> {
        self.weighted_indexes.iter().map(|&i| &self.records[i])
    }
}

impl<T> Index<usize> for WeightedDataFile<T> {
    type Output = T;

    fn index(&self, weighted_index: usize) -> &T {
        self.weighted(weighted_index)
    }
}

/// Weights are `u32` on input; anything wider is malformed.
fn parse_weight(value: &str, line: usize) -> Result<usize, DataFileError> {
    let weight: u32 = value
        .trim()
        .parse()
        .map_err(|_| DataFileError::MalformedWeight {
            line,
            value: value.to_string(),
        })?;
    Ok(weight as usize)
}
