use csv::ReaderBuilder;
use encoding_rs::{UTF_8, WINDOWS_1252};
use phonesweep_core::{InputTable, RawCell};
use std::borrow::Cow;

pub(crate) fn read_csv(bytes: &[u8]) -> Result<InputTable, String> {
    let text = decode(bytes);
    if text.trim().is_empty() {
        return Err("no columns to parse from file".to_string());
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| format!("failed to read header row: {err}"))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|err| format!("failed to parse row {}: {err}", index + 1))?;
        rows.push(record.iter().map(RawCell::infer).collect());
    }

    InputTable::from_rows(headers, rows).map_err(|err| err.to_string())
}

/// UTF-8 (BOM stripped) first, Windows-1252 when the bytes are not valid UTF-8.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text;
    }
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text
}
