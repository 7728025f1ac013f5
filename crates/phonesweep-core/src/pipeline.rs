use crate::domain::{normalize_phone, select_phone_column, CanonicalPhoneNumber, RawCell};
use crate::dto::ProcessingResult;
use crate::error::CoreError;
use crate::table::{Column, InputTable};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    pub phone_column: Option<String>,
}

pub fn resolve_phone_column<'a>(
    table: &'a InputTable,
    options: &ProcessOptions,
) -> Result<&'a Column, CoreError> {
    let names = table.column_names();
    let selected = match options.phone_column.as_deref() {
        Some(name) => name,
        None => select_phone_column(names.as_slice()).ok_or_else(|| CoreError::NoPhoneColumn {
            columns: owned_names(&names),
        })?,
    };

    table
        .column(selected)
        .ok_or_else(|| CoreError::UnknownColumn {
            name: selected.to_string(),
            columns: owned_names(&names),
        })
}

pub fn normalize_cells(cells: &[RawCell]) -> Vec<Option<CanonicalPhoneNumber>> {
    cells.iter().map(normalize_phone).collect()
}

pub fn dedup_first_seen<I>(numbers: I) -> Vec<CanonicalPhoneNumber>
where
    I: IntoIterator<Item = CanonicalPhoneNumber>,
{
    let mut seen = HashSet::new();
    numbers
        .into_iter()
        .filter(|number| seen.insert(number.clone()))
        .collect()
}

pub fn process_table(
    table: &InputTable,
    options: &ProcessOptions,
) -> Result<ProcessingResult, CoreError> {
    let column = resolve_phone_column(table, options)?;

    let valid: Vec<CanonicalPhoneNumber> =
        normalize_cells(&column.cells).into_iter().flatten().collect();
    let valid_count = valid.len();
    let phone_numbers = dedup_first_seen(valid);
    let unique_count = phone_numbers.len();

    Ok(ProcessingResult {
        original_count: table.row_count(),
        valid_count,
        unique_count,
        duplicates_removed: valid_count - unique_count,
        phone_column: column.name.clone(),
        phone_numbers,
    })
}

fn owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::{dedup_first_seen, process_table, ProcessOptions};
    use crate::domain::{CanonicalPhoneNumber, RawCell};
    use crate::error::CoreError;
    use crate::table::{Column, InputTable};

    fn phone(value: &str) -> CanonicalPhoneNumber {
        CanonicalPhoneNumber::parse(value).expect("canonical")
    }

    fn table(columns: Vec<(&str, Vec<RawCell>)>) -> InputTable {
        InputTable::new(
            columns
                .into_iter()
                .map(|(name, cells)| Column::new(name, cells))
                .collect(),
        )
        .expect("table")
    }

    #[test]
    fn process_counts_valid_unique_and_duplicates() {
        let input = table(vec![(
            "Phone",
            vec![
                "9876543210".into(),
                "09876543210".into(),
                "+91-9876543210".into(),
                "12345".into(),
            ],
        )]);
        let result = process_table(&input, &ProcessOptions::default()).expect("process");
        assert_eq!(result.original_count, 4);
        assert_eq!(result.valid_count, 3);
        assert_eq!(result.unique_count, 1);
        assert_eq!(result.duplicates_removed, 2);
        assert_eq!(result.phone_column, "Phone");
        assert_eq!(result.phone_numbers(), &[phone("+919876543210")]);
    }

    #[test]
    fn process_keeps_overlong_values_by_rightmost_digits() {
        let input = table(vec![(
            "Phone",
            vec!["9876543210".into(), "919876543210999".into()],
        )]);
        let result = process_table(&input, &ProcessOptions::default()).expect("process");
        assert_eq!(result.valid_count, 2);
        assert_eq!(
            result.phone_numbers(),
            &[phone("+919876543210"), phone("+916543210999")]
        );
    }

    #[test]
    fn process_preserves_first_occurrence_order() {
        let input = table(vec![(
            "Mobile",
            vec![
                "8888888888".into(),
                "7777777777".into(),
                "08888888888".into(),
                RawCell::Missing,
                "N/A".into(),
                "6666666666".into(),
                "7777777777".into(),
            ],
        )]);
        let result = process_table(&input, &ProcessOptions::default()).expect("process");
        assert_eq!(result.original_count, 7);
        assert_eq!(result.valid_count, 5);
        assert_eq!(result.unique_count, 3);
        assert_eq!(result.duplicates_removed, 2);
        assert_eq!(
            result.phone_numbers(),
            &[
                phone("+918888888888"),
                phone("+917777777777"),
                phone("+916666666666"),
            ]
        );
    }

    #[test]
    fn process_uses_first_matching_column() {
        let input = table(vec![
            ("Name", vec!["Ada".into()]),
            ("Mobile No", vec!["9876543210".into()]),
            ("Phone", vec!["1111111111".into()]),
        ]);
        let result = process_table(&input, &ProcessOptions::default()).expect("process");
        assert_eq!(result.phone_column, "Mobile No");
        assert_eq!(result.phone_numbers(), &[phone("+919876543210")]);
    }

    #[test]
    fn process_reports_columns_when_none_match() {
        let input = table(vec![("A", vec![]), ("B", vec![])]);
        let err = process_table(&input, &ProcessOptions::default()).unwrap_err();
        assert_eq!(
            err,
            CoreError::NoPhoneColumn {
                columns: vec!["A".to_string(), "B".to_string()]
            }
        );
        assert_eq!(err.columns().map(<[String]>::len), Some(2));
    }

    #[test]
    fn process_honors_column_override() {
        let input = table(vec![
            ("Phone", vec!["1111111111".into()]),
            ("Alt", vec!["2222222222".into()]),
        ]);
        let options = ProcessOptions {
            phone_column: Some("Alt".to_string()),
        };
        let result = process_table(&input, &options).expect("process");
        assert_eq!(result.phone_column, "Alt");
        assert_eq!(result.phone_numbers(), &[phone("+912222222222")]);
    }

    #[test]
    fn process_rejects_unknown_override() {
        let input = table(vec![("Phone", vec![])]);
        let options = ProcessOptions {
            phone_column: Some("Cell".to_string()),
        };
        let err = process_table(&input, &options).unwrap_err();
        assert!(matches!(err, CoreError::UnknownColumn { ref name, .. } if name == "Cell"));
    }

    #[test]
    fn process_empty_table_has_zero_counts() {
        let input = table(vec![("Phone", vec![])]);
        let result = process_table(&input, &ProcessOptions::default()).expect("process");
        assert_eq!(result.original_count, 0);
        assert_eq!(result.valid_count, 0);
        assert_eq!(result.duplicates_removed, 0);
        assert!(result.phone_numbers().is_empty());
    }

    #[test]
    fn summary_serializes_expected_fields() {
        let input = table(vec![("Phone", vec!["9876543210".into()])]);
        let result = process_table(&input, &ProcessOptions::default()).expect("process");
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["original_count"], 1);
        assert_eq!(json["valid_count"], 1);
        assert_eq!(json["unique_count"], 1);
        assert_eq!(json["duplicates_removed"], 0);
        assert_eq!(json["phone_column"], "Phone");
        assert!(json.get("phone_numbers").is_none());
    }

    #[test]
    fn dedup_keeps_first_seen() {
        let numbers = vec![
            phone("+912222222222"),
            phone("+911111111111"),
            phone("+912222222222"),
        ];
        assert_eq!(
            dedup_first_seen(numbers),
            vec![phone("+912222222222"), phone("+911111111111")]
        );
    }
}
