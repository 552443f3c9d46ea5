//! Error types for matrix operations

use thiserror::Error;

/// Errors that can occur during matrix operations
#[derive(Error, Debug)]
pub enum LinalgError {
    /// The shape is invalid for the operation
    #[error("Invalid shape [{code}]: {message}\nShape: {shape}\nOperation: {operation}\nSuggestion: {suggestion}")]
    InvalidShape {
        /// Error code for programmatic handling
        code: &'static str,
        /// Human-readable error message
        message: String,
        /// String representation of the offending shape
        shape: String,
        /// The operation that failed
        operation: String,
        /// Suggested fix for the error
        suggestion: String,
    },

    /// Matrices have incompatible shapes for the operation
    #[error("Shape compatibility error [{code}]: {message}\nOperation: {operation}\nLeft shape: {left_shape}\nRight shape: {right_shape}\nSuggestion: {suggestion}")]
    IncompatibleShapes {
        /// Error code for programmatic handling
        code: &'static str,
        /// Human-readable error message
        message: String,
        /// The operation that failed
        operation: String,
        /// String representation of the left matrix shape
        left_shape: String,
        /// String representation of the right matrix shape
        right_shape: String,
        /// Suggested fix for the error
        suggestion: String,
    },

    /// The matrix has no inverse under the chosen numeric method
    #[error("Singular matrix [{code}]: {message}\nShape: {shape}\nColumn: {column}\nSuggestion: {suggestion}")]
    Singular {
        /// Error code for programmatic handling
        code: &'static str,
        /// Human-readable error message
        message: String,
        /// String representation of the matrix shape
        shape: String,
        /// Column at which elimination found no usable pivot
        column: usize,
        /// Suggested fix for the error
        suggestion: String,
    },
}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, LinalgError>;

impl LinalgError {
    /// Create an invalid shape error
    pub fn invalid_shape<S1, S2, S3, S4>(
        code: &'static str,
        message: S1,
        shape: S2,
        operation: S3,
        suggestion: S4,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        Self::InvalidShape {
            code,
            message: message.into(),
            shape: shape.into(),
            operation: operation.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create an incompatible shapes error
    pub fn incompatible_shapes<S1, S2, S3, S4, S5>(
        code: &'static str,
        message: S1,
        operation: S2,
        left_shape: S3,
        right_shape: S4,
        suggestion: S5,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
        S5: Into<String>,
    {
        Self::IncompatibleShapes {
            code,
            message: message.into(),
            operation: operation.into(),
            left_shape: left_shape.into(),
            right_shape: right_shape.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create a singular matrix error
    pub fn singular<S1, S2, S3>(
        code: &'static str,
        message: S1,
        shape: S2,
        column: usize,
        suggestion: S3,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::Singular {
            code,
            message: message.into(),
            shape: shape.into(),
            column,
            suggestion: suggestion.into(),
        }
    }

    /// Get the error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidShape { code, .. } => code,
            Self::IncompatibleShapes { code, .. } => code,
            Self::Singular { code, .. } => code,
        }
    }
}
