use thiserror::Error;

/// Why a sheet could not be turned into a table. Returned by every loader in
/// place of a partial result; the presenter decides how to report it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Unreadable workbook: {0}")]
    Workbook(String),

    #[error("Sheet not found: '{0}'")]
    SheetNotFound(String),

    #[error("Header row with '{marker}' not found in sheet '{sheet}'")]
    HeaderNotFound { sheet: String, marker: String },

    #[error("Column '{column}' missing from sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    #[error("Unexpected layout in sheet '{sheet}': {detail}")]
    UnexpectedLayout { sheet: String, detail: String },
}

#[derive(Error, Debug)]
pub enum PainelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PainelError>;
