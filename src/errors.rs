//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the incident analysis engine, providing the
//! error types and conversion utilities shared by all system components.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from the engine, configuration, and API layers
//! - **Output**: Structured error types with context
//! - **Error Categories**: Input, Validation, Configuration, Internal
//!
//! ## Key Features
//! - Single crate-wide `Result<T>` alias
//! - Structured variants with detailed context
//! - Error category tags for logging and API responses
//! - Automatic conversion from common library errors
//!
//! ## Usage
//! ```rust
//! use legalassist_analysis::errors::{AnalysisError, Result};
//!
//! fn check_description(description: &str) -> Result<()> {
//!     if description.trim().is_empty() {
//!         return Err(AnalysisError::InvalidInput {
//!             reason: "description must not be blank".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for the incident analysis engine
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Rejected caller input; the only failure the core engine produces
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Validation errors for configuration and API parameters
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Configuration loading or parsing errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Internal system errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInput { .. } => "input",
            AnalysisError::ValidationFailed { .. } => "validation",
            AnalysisError::Config { .. } => "configuration",
            AnalysisError::Internal { .. } => "internal",
            AnalysisError::Json(_) => "serialization",
        }
    }

    /// Whether the error was caused by the caller (maps to HTTP 4xx)
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidInput { .. } | AnalysisError::ValidationFailed { .. }
        )
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::Internal {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<regex::Error> for AnalysisError {
    fn from(err: regex::Error) -> Self {
        AnalysisError::Internal {
            message: format!("Invalid pattern: {}", err),
        }
    }
}
