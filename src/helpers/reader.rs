use crate::criteria::Criteria;
use crate::error::HoursError;
use crate::helpers::string::split_by;
use crate::ranking::Record;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Cannot read '{path}': {source}")]
    OpenFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Decodes raw file content into text.
///
/// A byte order mark selects its encoding. Without one, valid UTF-8 is used as is
/// and anything else is read as Windows-1252, the code page the register is
/// usually exported in.
pub(crate) fn decode(bytes: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
        return text;
    }
    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text,
        None => {
            warn!("input is not valid UTF-8, decoding as {}", WINDOWS_1252.name());
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text
        }
    }
}

/// Splits text into records, one per line, with trimmed fields.
pub fn parse_records(text: &str, criteria: &Criteria) -> Vec<Record> {
    let mut skipped = 0;
    let records: Vec<Record> = text
        .lines()
        .filter(|line| {
            let keep = !(criteria.skip_empty_rows && line.trim().is_empty());
            if !keep {
                skipped += 1;
            }
            keep
        })
        .map(|line| Record::new(split_by(line, criteria.field_separator)))
        .collect();
    if skipped > 0 {
        debug!(skipped, "skipped blank lines");
    }
    records
}

/// Reads every record of a register file.
///
/// # Arguments
/// * `path` - Path of the semicolon separated register
/// * `criteria` - Layout of the register
///
/// # Returns
/// * `Result<Vec<Record>, HoursError>` - Records in file order
pub fn read_records(path: impl AsRef<Path>, criteria: &Criteria) -> Result<Vec<Record>, HoursError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ReaderError::OpenFileError {
        path: path.display().to_string(),
        source,
    })?;
    let records = parse_records(&decode(&bytes), criteria);
    info!(path = %path.display(), records = records.len(), "read register");
    Ok(records)
}
