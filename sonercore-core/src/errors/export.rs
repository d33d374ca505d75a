//! Report export errors

use thiserror::Error;

/// Errors raised while producing the HTML report
#[derive(Error, Debug)]
pub enum ExportError {
    /// Template registration or rendering failed
    #[error("Template rendering failed: {0}")]
    Template(String),

    /// The snapshot could not be turned into template data
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error while writing the report
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<handlebars::RenderError> for ExportError {
    fn from(err: handlebars::RenderError) -> Self {
        ExportError::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for ExportError {
    fn from(err: handlebars::TemplateError) -> Self {
        ExportError::Template(err.to_string())
    }
}
