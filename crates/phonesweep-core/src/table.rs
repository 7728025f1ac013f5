use crate::domain::RawCell;
use crate::error::CoreError;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<RawCell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<RawCell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputTable {
    columns: Vec<Column>,
    row_count: usize,
}

impl InputTable {
    pub fn new(columns: Vec<Column>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(CoreError::DuplicateColumn(column.name.clone()));
            }
        }

        let row_count = columns.first().map_or(0, |column| column.cells.len());
        for column in &columns {
            if column.cells.len() != row_count {
                return Err(CoreError::RaggedColumn {
                    column: column.name.clone(),
                    expected: row_count,
                    found: column.cells.len(),
                });
            }
        }

        Ok(Self { columns, row_count })
    }

    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<RawCell>>) -> Result<Self, CoreError> {
        let names = unique_headers(headers);
        let width = names.len();
        let mut cells: Vec<Vec<RawCell>> = vec![Vec::new(); width];

        for (index, mut row) in rows.into_iter().enumerate() {
            if row.iter().all(RawCell::is_missing) {
                continue;
            }
            if row.len() > width {
                if row[width..].iter().any(|cell| !cell.is_missing()) {
                    return Err(CoreError::RowTooLong {
                        row: index + 1,
                        expected: width,
                        found: row.len(),
                    });
                }
                row.truncate(width);
            }
            row.resize(width, RawCell::Missing);
            for (column, cell) in cells.iter_mut().zip(row) {
                column.push(cell);
            }
        }

        let columns = names
            .into_iter()
            .zip(cells)
            .map(|(name, cells)| Column { name, cells })
            .collect();
        Self::new(columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(headers.len());

    for (index, header) in headers.into_iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {index}")
        } else {
            header
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(name.clone());
        out.push(name);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{Column, InputTable};
    use crate::domain::RawCell;
    use crate::error::CoreError;

    fn text_row(values: &[&str]) -> Vec<RawCell> {
        values.iter().map(|value| RawCell::infer(value)).collect()
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let err = InputTable::new(vec![
            Column::new("Phone", vec![]),
            Column::new("Phone", vec![]),
        ])
        .unwrap_err();
        assert_eq!(err, CoreError::DuplicateColumn("Phone".to_string()));
    }

    #[test]
    fn new_rejects_ragged_columns() {
        let err = InputTable::new(vec![
            Column::new("Name", vec![RawCell::from("Ada")]),
            Column::new("Phone", vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, CoreError::RaggedColumn { found: 0, .. }));
    }

    #[test]
    fn from_rows_names_blank_and_repeated_headers() {
        let table = InputTable::from_rows(
            vec![
                "Phone".to_string(),
                "".to_string(),
                "Phone".to_string(),
                "Phone".to_string(),
            ],
            vec![],
        )
        .expect("table");
        assert_eq!(
            table.column_names(),
            vec!["Phone", "Unnamed: 1", "Phone.1", "Phone.2"]
        );
    }

    #[test]
    fn from_rows_pads_and_skips_blank_rows() {
        let table = InputTable::from_rows(
            vec!["Name".to_string(), "Phone".to_string()],
            vec![
                text_row(&["Ada"]),
                text_row(&["", ""]),
                text_row(&["Grace", "9876543210", ""]),
            ],
        )
        .expect("table");
        assert_eq!(table.row_count(), 2);
        let phone = table.column("Phone").expect("phone column");
        assert_eq!(
            phone.cells,
            vec![RawCell::Missing, RawCell::Int(9_876_543_210)]
        );
    }

    #[test]
    fn from_rows_rejects_extra_values() {
        let err = InputTable::from_rows(
            vec!["Phone".to_string()],
            vec![text_row(&["9876543210", "extra"])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CoreError::RowTooLong {
                row: 1,
                expected: 1,
                found: 2
            }
        );
    }
}
