use std::fmt;

use weighted::{bounded_string, check_field_count, DataFileRecord, RecordError};

pub const MAX_ZC_CODE_LEN: usize = 12;
pub const MAX_ZC_TOWN_LEN: usize = 80;
pub const MAX_ZC_DIV_LEN: usize = 80;

/// One row of the zip code input file: `zc_code, zc_town, zc_div`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipCodeDataFileRecord {
    zc_code: String,
    zc_town: String,
    zc_div: String,
}

impl DataFileRecord for ZipCodeDataFileRecord {
    const FIELD_COUNT: usize = 3;

    fn from_fields(fields: &[String]) -> Result<Self, RecordError> {
        check_field_count::<Self>(fields)?;

        Ok(Self {
            zc_code: bounded_string("zc_code", &fields[0], MAX_ZC_CODE_LEN)?,
            zc_town: bounded_string("zc_town", &fields[1], MAX_ZC_TOWN_LEN)?,
            zc_div: bounded_string("zc_div", &fields[2], MAX_ZC_DIV_LEN)?,
        })
    }
}

impl ZipCodeDataFileRecord {
    pub fn zc_code(&self) -> &str {
        &self.zc_code
    }

    pub fn zc_town(&self) -> &str {
        &self.zc_town
    }

    pub fn zc_div(&self) -> &str {
        &self.zc_div
    }

    pub fn to_delimited(&self, sep: char) -> String {
        format!("{}{sep}{}{sep}{}", self.zc_code, self.zc_town, self.zc_div)
    }
}

impl fmt::Display for ZipCodeDataFileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_delimited('\t'))
    }
}
