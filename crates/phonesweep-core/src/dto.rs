use crate::domain::CanonicalPhoneNumber;
use serde::{Deserialize, Serialize};

pub const OUTPUT_COLUMN_NAME: &str = "Phone_Number";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingResult {
    pub original_count: usize,
    pub valid_count: usize,
    pub unique_count: usize,
    pub duplicates_removed: usize,
    pub phone_column: String,
    #[serde(skip)]
    pub phone_numbers: Vec<CanonicalPhoneNumber>,
}

impl ProcessingResult {
    pub fn phone_numbers(&self) -> &[CanonicalPhoneNumber] {
        &self.phone_numbers
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedValueDto {
    pub input: String,
    pub phone_number: Option<CanonicalPhoneNumber>,
}

pub const DEFAULT_OUTPUT_STEM: &str = "cleaned_phone_numbers";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            OutputFormat::Csv => "text/csv",
        }
    }

    pub fn default_file_name(self) -> String {
        format!("{DEFAULT_OUTPUT_STEM}.{}", self.extension())
    }

    pub fn matches_file_name(self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .is_some_and(|(stem, ext)| {
                !stem.is_empty() && ext.eq_ignore_ascii_case(self.extension())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::OutputFormat;

    #[test]
    fn default_file_names() {
        assert_eq!(
            OutputFormat::Xlsx.default_file_name(),
            "cleaned_phone_numbers.xlsx"
        );
        assert_eq!(
            OutputFormat::Csv.default_file_name(),
            "cleaned_phone_numbers.csv"
        );
    }

    #[test]
    fn matches_file_name_checks_extension() {
        assert!(OutputFormat::Xlsx.matches_file_name("out.XLSX"));
        assert!(!OutputFormat::Xlsx.matches_file_name("out.csv"));
        assert!(!OutputFormat::Csv.matches_file_name(".csv"));
        assert!(!OutputFormat::Csv.matches_file_name("csv"));
    }
}
