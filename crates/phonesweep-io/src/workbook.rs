use calamine::{Data, Range, Reader, Xls, Xlsx};
use phonesweep_core::{InputTable, RawCell};
use std::fmt;
use std::io::{Cursor, Read, Seek};

pub(crate) fn read_xlsx(bytes: &[u8]) -> Result<InputTable, String> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).map_err(|err| err.to_string())?;
    let range = first_sheet(&mut workbook)?;
    table_from_range(&range)
}

pub(crate) fn read_xls(bytes: &[u8]) -> Result<InputTable, String> {
    let mut workbook: Xls<_> = Xls::new(Cursor::new(bytes)).map_err(|err| err.to_string())?;
    let range = first_sheet(&mut workbook)?;
    table_from_range(&range)
}

fn first_sheet<RS, R>(workbook: &mut R) -> Result<Range<Data>, String>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: fmt::Display,
{
    match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => Ok(range),
        Some(Err(err)) => Err(err.to_string()),
        None => Err("workbook has no worksheets".to_string()),
    }
}

/// First row is the header; the rest are records.
fn table_from_range(range: &Range<Data>) -> Result<InputTable, String> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(InputTable::default());
    };

    let headers = header_row.iter().map(header_text).collect();
    let records = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();
    InputTable::from_rows(headers, records).map_err(|err| err.to_string())
}

fn header_text(data: &Data) -> String {
    match data {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(value) => value.clone(),
        other => other.to_string(),
    }
}

fn cell_from_data(data: &Data) -> RawCell {
    match data {
        Data::Empty | Data::Error(_) => RawCell::Missing,
        Data::Int(value) => RawCell::Int(*value),
        Data::Float(value) => RawCell::Float(*value),
        Data::Bool(value) => RawCell::Bool(*value),
        Data::String(value) => RawCell::Text(value.clone()),
        other => RawCell::Text(other.to_string()),
    }
}
