//! Loading weighted data files from disk and reporting on them.
use anyhow::{Context, Result};
use rand::Rng;
use splitter::TextSplitter;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use tracing::info;
use weighted::{DataFileRecord, SizeFilter, WeightedDataFile};

/// Loads the weighted data file at `path`, splitting fields on `delimiter`.
///
/// # Errors
///
/// Fails if the file cannot be opened or any line is rejected; the error
/// names the file.
pub fn load<T: DataFileRecord>(path: &Path, delimiter: char) -> Result<WeightedDataFile<T>> {
    let mut splitter = TextSplitter::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .with_delimiter(delimiter);

    let wdf = WeightedDataFile::from_source(&mut splitter)
        .with_context(|| format!("failed to load {}", path.display()))?;

    info!(
        path = %path.display(),
        total_weight = wdf.size(SizeFilter::AllRecords),
        unique_records = wdf.size(SizeFilter::UniqueRecordsOnly),
        "loaded weighted data file"
    );
    Ok(wdf)
}

/// Writes the two size counts.
pub fn write_stats<T, W: Write>(wdf: &WeightedDataFile<T>, out: &mut W) -> Result<()> {
    writeln!(out, "total weight:   {}", wdf.size(SizeFilter::AllRecords))?;
    writeln!(
        out,
        "unique records: {}",
        wdf.size(SizeFilter::UniqueRecordsOnly)
    )?;
    Ok(())
}

/// Writes `count` weighted draws, one record per line.
///
/// Writes nothing if the file has no weight at all.
pub fn write_samples<T: Display, R: Rng + ?Sized, W: Write>(
    wdf: &WeightedDataFile<T>,
    count: usize,
    rng: &mut R,
    out: &mut W,
) -> Result<usize> {
    let mut written = 0;
    for _ in 0..count {
        let Some(rec) = wdf.sample(rng) else {
            break;
        };
        writeln!(out, "{rec}")?;
        written += 1;
    }
    Ok(written)
}

/// Writes every record, either once each or repeated by weight.
pub fn write_dump<T: Display, W: Write>(
    wdf: &WeightedDataFile<T>,
    unique: bool,
    out: &mut W,
) -> Result<()> {
    if unique {
        for (ordinal, rec) in wdf.iter_unique().enumerate() {
            let weight = wdf.weight_of(ordinal).unwrap_or_default();
            writeln!(out, "{weight}\t{rec}")?;
        }
    } else {
        for rec in wdf.iter_weighted() {
            writeln!(out, "{rec}")?;
        }
    }
    Ok(())
}
