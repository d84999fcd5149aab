use super::ScheduleError;
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// true if the file name ends with a gzip extension.
pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// reads every row of a CSV file with headers, decompressing `.gz` files.
pub fn read_csv_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ScheduleError> {
    let read_error = |message: String| ScheduleError::ReadError {
        path: path.display().to_string(),
        message,
    };
    let f = File::open(path).map_err(|e| read_error(format!("while opening file, {e}")))?;
    let r: Box<dyn Read> = if is_gzip(path) {
        Box::new(BufReader::new(GzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(r);
    reader
        .deserialize()
        .enumerate()
        .map(|(idx, row)| row.map_err(|e| read_error(format!("while reading row {idx}, {e}"))))
        .collect()
}
