// ==========================================
// Sistema de Asignación de Bodega - importer error types
// ==========================================

use thiserror::Error;

/// Errors while parsing the slot/product sheets.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file-level =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileRead(String),

    #[error("Excel parse failed: {0}")]
    ExcelParse(String),

    #[error("CSV parse failed: {0}")]
    CsvParse(String),

    // ===== mapping =====
    #[error("missing required column '{column}' in {sheet}")]
    MissingColumn { sheet: String, column: String },

    #[error("row {row}, field '{field}': cannot parse '{value}' as {expected}")]
    TypeConversion {
        row: usize,
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("row {row}, field '{field}': value {value} must not be negative")]
    NegativeValue {
        row: usize,
        field: String,
        value: f64,
    },
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileRead(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParse(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParse(err.to_string())
    }
}

/// Result type alias for the importer layer.
pub type ImportResult<T> = Result<T, ImportError>;
