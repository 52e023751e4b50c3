use serde::Serialize;

use crate::errors::AppError;

/// Number of data rows shown under the header.
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CsvPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Accepts a file whose content type is `text/csv` or whose name ends in `.csv`.
pub fn validate_csv_file(file_name: &str, content_type: Option<&str>) -> Result<(), AppError> {
    let is_csv_type = content_type
        .map(|ct| ct.split(';').next().unwrap_or("").trim() == "text/csv")
        .unwrap_or(false);

    if is_csv_type || file_name.ends_with(".csv") {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "'{file_name}' is not a CSV file. Please upload a CSV file"
        )))
    }
}

/// Best-effort preview: naive comma splitting, no quoting support.
/// Only the header line and the first five lines after it are considered;
/// blank lines among those are skipped.
pub fn preview_csv(text: &str) -> CsvPreview {
    let mut lines = text.split('\n');

    let headers = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .map(split_cells)
        .unwrap_or_default();

    let rows = lines
        .take(PREVIEW_ROWS)
        .filter(|line| !line.trim().is_empty())
        .map(split_cells)
        .collect();

    CsvPreview { headers, rows }
}

fn split_cells(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}
