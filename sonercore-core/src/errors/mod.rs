//! Error types for sonercore-core
//!
//! Every failure the client can hit is normalised into one of these enums
//! before it reaches a view. The views only ever store the rendered message.
//!
//! # Error Categories
//!
//! - **AnalysisError**: the analysis request (rejected input, transport, status, body)
//! - **ConfigError**: loading `sonercore.toml`
//! - **ExportError**: rendering or writing the HTML report
//!
//! # Examples
//!
//! ```rust
//! use sonercore::errors::AnalysisError;
//!
//! let err = AnalysisError::status(500, "Internal Server Error", "Failed to clone");
//! assert_eq!(err.to_string(), "Error: Internal Server Error (Failed to clone)");
//! assert!(err.is_request_failure());
//! ```

pub mod analysis;
pub mod config;
pub mod export;

pub use analysis::AnalysisError;
pub use config::ConfigError;
pub use export::ExportError;

/// Result type alias for analysis requests
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for report export
pub type ExportResult<T> = Result<T, ExportError>;
