//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only the edges of a run can fail (reading the document, writing the report).
//! Schema resolution and example generation degrade to placeholders instead.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The document text is not valid YAML/JSON.
    #[display("Failed to parse OpenAPI document: {_0}")]
    Yaml(serde_yaml::Error),

    /// A report could not be serialized to JSON.
    #[display("Failed to serialize report: {_0}")]
    Json(serde_json::Error),

    /// The document parsed but its shape is unusable (e.g. top level is not a mapping).
    /// Ignored for `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Invalid OpenAPI document: {_0}")]
    InvalidDocument(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
