//! Summary view state: the repository input, the in-flight guard and the
//! current result snapshot.
//!
//! Error and results are never held together. A settled request always
//! clears `loading`.

use tracing::{info, warn};

use crate::client::AnalysisService;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::model::{AnalysisResponse, FileResult, FunctionResult};
use crate::navigation::NavigationContext;

/// One successful analysis and the URL it was requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSnapshot {
    pub repo_url: String,
    pub response: AnalysisResponse,
}

impl AnalysisSnapshot {
    pub fn files(&self) -> &[FileResult] {
        &self.response.files
    }

    pub fn is_empty(&self) -> bool {
        self.response.files.is_empty()
    }
}

/// The mutually exclusive display states of the summary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState<'a> {
    Idle,
    Loading,
    Error(&'a str),
    Results(&'a AnalysisSnapshot),
}

/// Proof that a request was admitted by [`SummaryView::begin`].
#[derive(Debug)]
#[must_use = "a pending analysis must be settled"]
pub struct PendingAnalysis {
    repo_url: String,
}

impl PendingAnalysis {
    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }
}

#[derive(Debug, Default)]
pub struct SummaryView {
    repo_url: String,
    loading: bool,
    snapshot: Option<AnalysisSnapshot>,
    error: Option<String>,
}

impl SummaryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo_url(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            ..Self::default()
        }
    }

    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    /// Edit the input. Ignored while a request is in flight.
    pub fn set_repo_url(&mut self, repo_url: impl Into<String>) -> bool {
        if self.loading {
            return false;
        }
        self.repo_url = repo_url.into();
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn snapshot(&self) -> Option<&AnalysisSnapshot> {
        self.snapshot.as_ref()
    }

    /// Whether the analyze trigger is enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.repo_url.is_empty()
    }

    /// Admit a request for the current input, or `None` if the trigger is
    /// disabled. Clears the previous error and snapshot.
    pub fn begin(&mut self) -> Option<PendingAnalysis> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.snapshot = None;
        Some(PendingAnalysis {
            repo_url: self.repo_url.clone(),
        })
    }

    /// Record the outcome of an admitted request.
    pub fn settle(&mut self, pending: PendingAnalysis, result: AnalysisResult<AnalysisResponse>) {
        match result {
            Ok(response) => {
                self.error = None;
                self.snapshot = Some(AnalysisSnapshot {
                    repo_url: pending.repo_url,
                    response,
                });
            }
            Err(err) => {
                self.snapshot = None;
                self.error = Some(err.user_message());
            }
        }
        self.loading = false;
    }

    pub fn display_state(&self) -> DisplayState<'_> {
        if self.loading {
            DisplayState::Loading
        } else if let Some(message) = &self.error {
            DisplayState::Error(message)
        } else if let Some(snapshot) = &self.snapshot {
            DisplayState::Results(snapshot)
        } else {
            DisplayState::Idle
        }
    }

    /// Build the hand-off for the function at the given positions.
    pub fn select(&self, file_index: usize, function_index: usize) -> Option<NavigationContext> {
        let snapshot = self.snapshot.as_ref()?;
        let file = snapshot.response.files.get(file_index)?;
        let function = file.functions.get(function_index)?;
        Some(context_for(snapshot, file, function))
    }

    /// Same as [`select`](Self::select) but by file path and function name.
    pub fn select_by_name(&self, path: &str, function_name: &str) -> Option<NavigationContext> {
        let snapshot = self.snapshot.as_ref()?;
        let file = snapshot.response.file(path)?;
        let function = file.function(function_name)?;
        Some(context_for(snapshot, file, function))
    }
}

fn context_for(
    snapshot: &AnalysisSnapshot,
    file: &FileResult,
    function: &FunctionResult,
) -> NavigationContext {
    NavigationContext {
        file: file.clone(),
        function: function.clone(),
        repo_url: snapshot.repo_url.clone(),
    }
}

/// Run one analysis for the current input through `service`.
///
/// When the trigger is disabled the service is not contacted and the refusal
/// comes back as `EmptyRepoUrl` or `Busy`. Once a request was admitted the
/// outcome lives in the view and this returns `Ok`.
pub async fn run_analysis<S>(view: &mut SummaryView, service: &S) -> AnalysisResult<()>
where
    S: AnalysisService + ?Sized,
{
    if view.is_loading() {
        return Err(AnalysisError::Busy);
    }
    let Some(pending) = view.begin() else {
        return Err(AnalysisError::EmptyRepoUrl);
    };
    let result = service.analyze(pending.repo_url()).await;
    match &result {
        Ok(response) => info!("Snapshot replaced with {} files", response.files.len()),
        Err(err) => warn!("Analysis failed: {}", err),
    }
    view.settle(pending, result);
    Ok(())
}
