use std::fmt;

use weighted::{bounded_string, check_field_count, parse_field, DataFileRecord, RecordError};

pub const MAX_EX_ID_LEN: usize = 6;
pub const MAX_EX_NAME_LEN: usize = 100;
pub const MAX_EX_DESC_LEN: usize = 150;

/// One row of the exchange input file.
///
/// Layout (after the weight): `ex_id, ex_name, ex_open, ex_close, ex_desc, ex_ad_id`.
/// Opening and closing times are integers in `HHMM` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeDataFileRecord {
    ex_id: String,
    ex_name: String,
    ex_open: i32,
    ex_close: i32,
    ex_desc: String,
    ex_ad_id: i64,
}

impl DataFileRecord for ExchangeDataFileRecord {
    const FIELD_COUNT: usize = 6;

    fn from_fields(fields: &[String]) -> Result<Self, RecordError> {
        check_field_count::<Self>(fields)?;

        Ok(Self {
            ex_id: bounded_string("ex_id", &fields[0], MAX_EX_ID_LEN)?,
            ex_name: bounded_string("ex_name", &fields[1], MAX_EX_NAME_LEN)?,
            ex_open: parse_field("ex_open", &fields[2])?,
            ex_close: parse_field("ex_close", &fields[3])?,
            ex_desc: bounded_string("ex_desc", &fields[4], MAX_EX_DESC_LEN)?,
            ex_ad_id: parse_field("ex_ad_id", &fields[5])?,
        })
    }
}

impl ExchangeDataFileRecord {
    pub fn ex_id(&self) -> &str {
        &self.ex_id
    }

    pub fn ex_name(&self) -> &str {
        &self.ex_name
    }

    pub fn ex_open(&self) -> i32 {
        self.ex_open
    }

    pub fn ex_close(&self) -> i32 {
        self.ex_close
    }

    pub fn ex_desc(&self) -> &str {
        &self.ex_desc
    }

    pub fn ex_ad_id(&self) -> i64 {
        self.ex_ad_id
    }

    /// Writes the record back out, times zero-padded to four digits.
    pub fn to_delimited(&self, sep: char) -> String {
        format!(
            "{}{sep}{}{sep}{:04}{sep}{:04}{sep}{}{sep}{}",
            self.ex_id, self.ex_name, self.ex_open, self.ex_close, self.ex_desc, self.ex_ad_id
        )
    }
}

impl fmt::Display for ExchangeDataFileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_delimited('\t'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use weighted::{DataFileError, SizeFilter, WeightedDataFile};

    const EXCHANGE_TXT: &str = "\
1\tNYSE\tNew York Stock Exchange\t0930\t1600\tNew York Stock Exchange description\t4300000001
1\tNASDAQ\tNasdaq Stock Market\t0930\t1600\tNasdaq description\t4300000002

1\tAMEX\tAmerican Stock Exchange\t0930\t1600\tAMEX description\t4300000003
1\tPCX\tPacific Exchange\t0930\t1600\tPCX description\t4300000004
";

    fn fields(s: &str) -> Vec<String> {
        s.split('\t').map(String::from).collect()
    }

    #[test]
    fn parses_all_columns() -> Result<()> {
        let rec = ExchangeDataFileRecord::from_fields(&fields(
            "NYSE\tNew York Stock Exchange\t0930\t1600\tdesc\t4300000001",
        ))?;
        assert_eq!(rec.ex_id(), "NYSE");
        assert_eq!(rec.ex_name(), "New York Stock Exchange");
        assert_eq!(rec.ex_open(), 930);
        assert_eq!(rec.ex_close(), 1600);
        assert_eq!(rec.ex_desc(), "desc");
        assert_eq!(rec.ex_ad_id(), 4_300_000_001);
        Ok(())
    }

    #[test]
    fn to_delimited_pads_times() -> Result<()> {
        let rec = ExchangeDataFileRecord::from_fields(&fields("PCX\tPacific\t930\t0\tdesc\t7"))?;
        assert_eq!(rec.to_delimited('|'), "PCX|Pacific|0930|0000|desc|7");
        assert_eq!(rec.to_string(), "PCX\tPacific\t0930\t0000\tdesc\t7");
        Ok(())
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            ExchangeDataFileRecord::from_fields(&fields("NYSE\tname")),
            Err(RecordError::FieldCountMismatch {
                expected: 6,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_bad_numbers_and_long_ids() {
        assert!(matches!(
            ExchangeDataFileRecord::from_fields(&fields("NYSE\tn\tnine\t1600\td\t1")),
            Err(RecordError::InvalidField {
                field: "ex_open",
                ..
            })
        ));
        assert!(matches!(
            ExchangeDataFileRecord::from_fields(&fields("TOOLONGID\tn\t0930\t1600\td\t1")),
            Err(RecordError::InvalidField { field: "ex_id", .. })
        ));
    }

    #[test]
    fn loads_exchange_file() -> Result<()> {
        let wdf: WeightedDataFile<ExchangeDataFileRecord> =
            WeightedDataFile::from_reader(EXCHANGE_TXT.as_bytes())?;
        assert_eq!(wdf.size(SizeFilter::AllRecords), 4);
        assert_eq!(wdf.size(SizeFilter::UniqueRecordsOnly), 4);
        assert_eq!(wdf[2].ex_id(), "AMEX");
        assert_eq!(wdf.unique_record(3).ex_ad_id(), 4_300_000_004);
        Ok(())
    }

    #[test]
    fn bad_row_fails_whole_load_with_line() {
        let text = format!("{EXCHANGE_TXT}1\tNYSE\tshort\n");
        let res: Result<WeightedDataFile<ExchangeDataFileRecord>, _> =
            WeightedDataFile::from_reader(text.as_bytes());
        assert!(matches!(
            res,
            Err(DataFileError::FieldCountMismatch {
                line: 6,
                expected: 6,
                found: 2
            })
        ));
    }
}
