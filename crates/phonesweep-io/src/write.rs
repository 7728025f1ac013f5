use crate::error::{CleanError, Result};
use phonesweep_core::{CanonicalPhoneNumber, OutputFormat, OUTPUT_COLUMN_NAME};
use rust_xlsxwriter::{Workbook, XlsxError};

/// A finished output file held in memory; the caller decides where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Writes a single `Phone_Number` column holding `numbers` in order.
pub fn write_artifact(
    numbers: &[CanonicalPhoneNumber],
    format: OutputFormat,
    file_name: Option<&str>,
) -> Result<OutputArtifact> {
    let bytes = match format {
        OutputFormat::Xlsx => write_xlsx(numbers)?,
        OutputFormat::Csv => write_csv(numbers)?,
    };

    Ok(OutputArtifact {
        file_name: file_name
            .map(str::to_string)
            .unwrap_or_else(|| format.default_file_name()),
        content_type: format.content_type(),
        bytes,
    })
}

fn write_xlsx(numbers: &[CanonicalPhoneNumber]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .write_string(0, 0, OUTPUT_COLUMN_NAME)
        .map_err(xlsx_error)?;
    worksheet.set_column_width(0, 18).map_err(xlsx_error)?;

    for (index, number) in numbers.iter().enumerate() {
        let row = u32::try_from(index + 1)
            .map_err(|_| CleanError::Processing("too many rows for a worksheet".to_string()))?;
        worksheet
            .write_string(row, 0, number.as_str())
            .map_err(xlsx_error)?;
    }

    workbook.save_to_buffer().map_err(xlsx_error)
}

fn write_csv(numbers: &[CanonicalPhoneNumber]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([OUTPUT_COLUMN_NAME])
        .map_err(csv_error)?;
    for number in numbers {
        writer.write_record([number.as_str()]).map_err(csv_error)?;
    }
    writer
        .into_inner()
        .map_err(|err| CleanError::Processing(err.to_string()))
}

fn xlsx_error(err: XlsxError) -> CleanError {
    CleanError::Processing(format!("failed to write xlsx output: {err}"))
}

fn csv_error(err: csv::Error) -> CleanError {
    CleanError::Processing(format!("failed to write csv output: {err}"))
}

#[cfg(test)]
mod tests {
    use super::write_artifact;
    use phonesweep_core::{CanonicalPhoneNumber, OutputFormat};

    fn numbers() -> Vec<CanonicalPhoneNumber> {
        ["+919876543210", "+918888888888"]
            .into_iter()
            .map(|value| CanonicalPhoneNumber::parse(value).expect("canonical"))
            .collect()
    }

    #[test]
    fn csv_artifact_has_header_and_rows() {
        let artifact = write_artifact(&numbers(), OutputFormat::Csv, None).expect("csv");
        assert_eq!(artifact.file_name, "cleaned_phone_numbers.csv");
        assert_eq!(artifact.content_type, "text/csv");
        let text = String::from_utf8(artifact.bytes).expect("utf8");
        assert_eq!(text, "Phone_Number\n+919876543210\n+918888888888\n");
    }

    #[test]
    fn xlsx_artifact_uses_default_name() {
        let artifact = write_artifact(&numbers(), OutputFormat::Xlsx, None).expect("xlsx");
        assert_eq!(artifact.file_name, "cleaned_phone_numbers.xlsx");
        assert!(artifact.bytes.starts_with(b"PK"));
    }

    #[test]
    fn artifact_honors_custom_name() {
        let artifact =
            write_artifact(&[], OutputFormat::Csv, Some("numbers.csv")).expect("csv");
        assert_eq!(artifact.file_name, "numbers.csv");
        assert_eq!(artifact.bytes, b"Phone_Number\n");
    }
}
