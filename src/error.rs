//! Error types for blade import.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for blade import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Airfoil row could not be parsed (-3)
    ParseError = -3,
    /// File exists but could not be read (-4)
    IoError = -4,
    /// Blade file unrecognized or empty after filtering (-10)
    FormatError = -10,
    /// Airfoil has no upper or no lower side (E100)
    CalibrationFailed = 100,
    /// Invalid import option (E200)
    InvalidOption = 200,
    /// Geometry kernel rejected the output (E300)
    KernelFailed = 300,
}

/// Main error type for the importer.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Unrecognized blade file: {message}")]
    Format { message: String },

    #[error("Blade file has {found} usable section(s), at least 2 are required")]
    TooFewSections { found: usize },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Cannot calibrate offset: {message}")]
    Calibration { message: String },

    #[error("Invalid value for option '{name}': {value}")]
    InvalidOption { name: String, value: String },

    #[error("Geometry kernel error: {message}")]
    Kernel { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImportError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ImportError::FileNotFound { .. } => ErrorCode::FileNotFound,
            ImportError::EmptyFile { .. } => ErrorCode::EmptyFile,
            ImportError::Format { .. } => ErrorCode::FormatError,
            ImportError::TooFewSections { .. } => ErrorCode::FormatError,
            ImportError::Parse { .. } => ErrorCode::ParseError,
            ImportError::Calibration { .. } => ErrorCode::CalibrationFailed,
            ImportError::InvalidOption { .. } => ErrorCode::InvalidOption,
            ImportError::Kernel { .. } => ErrorCode::KernelFailed,
            ImportError::Io(_) => ErrorCode::IoError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;
