//! SonerCore client library.
//!
//! Consumes the results of the cognitive complexity analysis service and
//! turns them into a summary screen and per-function detail screens.
//!
//! High-level modules:
//! - `model`: request/response contract with the analysis service.
//! - `tier`: score → Low/Medium/High classification.
//! - `client`: the `AnalysisService` seam and its HTTP implementation.
//! - `summary`: summary view state (input, in-flight guard, snapshot, error).
//! - `navigation`: summary → details transitions and history.
//! - `detail`: details view resolution, including the missing-selection guard.
//! - `link`: deep links into the repository host.
//! - `render`: terminal renderers.
//! - `export`: HTML report.
//! - `config`: `sonercore.toml` loading.
//! - `errors`: error types.

pub mod client;
pub mod common;
pub mod config;
pub mod detail;
pub mod errors;
pub mod export;
pub mod link;
pub mod model;
pub mod navigation;
pub mod render;
pub mod summary;
pub mod tier;

pub use client::{AnalysisService, HttpAnalysisClient};
pub use config::ClientConfig;
pub use detail::{DetailView, FunctionDetail};
pub use errors::AnalysisError;
pub use model::{AnalysisRequest, AnalysisResponse, Detail, FileResult, FunctionResult};
pub use navigation::{NavigateAction, NavigationContext, Navigator, Route};
pub use summary::{run_analysis, AnalysisSnapshot, DisplayState, SummaryView};
pub use tier::{classify, Tier};
