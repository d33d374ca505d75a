//! One-shot commands: analyze, show, link, export.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use tracing::info;

use sonercore::export::write_report;
use sonercore::link::blob_link;
use sonercore::render::{render_detail, render_summary, Style};
use sonercore::{
    run_analysis, AnalysisService, AnalysisSnapshot, DetailView, NavigateAction, Navigator,
    SummaryView,
};

/// Run one analysis and hand back the settled view, failing if the request failed.
async fn analyze_once<S>(service: &S, repo_url: &str) -> Result<SummaryView>
where
    S: AnalysisService + ?Sized,
{
    let mut view = SummaryView::with_repo_url(repo_url);
    run_analysis(&mut view, service).await?;
    if let Some(message) = view.error() {
        bail!("{}", message);
    }
    Ok(view)
}

fn snapshot_of(view: &SummaryView) -> Result<&AnalysisSnapshot> {
    view.snapshot()
        .ok_or_else(|| anyhow!("analysis finished without a result"))
}

pub async fn run_analyze<S>(service: &S, repo_url: &str, json: bool, style: Style) -> Result<()>
where
    S: AnalysisService + ?Sized,
{
    let view = analyze_once(service, repo_url).await?;
    if json {
        let snapshot = snapshot_of(&view)?;
        println!("{}", serde_json::to_string_pretty(&snapshot.response)?);
    } else {
        print!("{}", render_summary(&view, style));
    }
    Ok(())
}

pub async fn run_show<S>(
    service: &S,
    repo_url: &str,
    file: &str,
    function: &str,
    style: Style,
) -> Result<()>
where
    S: AnalysisService + ?Sized,
{
    let view = analyze_once(service, repo_url).await?;
    let mut navigator = Navigator::new();
    match view.select_by_name(file, function) {
        Some(context) => navigator.dispatch(NavigateAction::ToDetails(context)),
        None => info!("No function {} in {}", function, file),
    }
    print!("{}", render_detail(&DetailView::resolve(navigator.context()), style));
    Ok(())
}

pub fn run_link(repo_url: &str, file: &str, start_line: i64, end_line: i64) {
    println!("{}", blob_link(repo_url, file, start_line, end_line));
}

pub async fn run_export<S>(service: &S, repo_url: &str, output: &Path) -> Result<()>
where
    S: AnalysisService + ?Sized,
{
    let view = analyze_once(service, repo_url).await?;
    let snapshot = snapshot_of(&view)?;
    write_report(snapshot, output)
        .with_context(|| format!("failed to write report to {}", output.display()))?;
    println!("Report written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sonercore::errors::{AnalysisError, AnalysisResult};
    use sonercore::AnalysisResponse;

    struct Failing;

    #[async_trait]
    impl AnalysisService for Failing {
        async fn analyze(&self, _repo_url: &str) -> AnalysisResult<AnalysisResponse> {
            Err(AnalysisError::status(500, "Internal Server Error", "Failed to clone"))
        }
    }

    struct Empty;

    #[async_trait]
    impl AnalysisService for Empty {
        async fn analyze(&self, _repo_url: &str) -> AnalysisResult<AnalysisResponse> {
            Ok(AnalysisResponse::default())
        }
    }

    #[tokio::test]
    async fn test_failure_surfaces_message() {
        let err = analyze_once(&Failing, "https://github.com/o/r").await.unwrap_err();
        assert_eq!(err.to_string(), "Error: Internal Server Error (Failed to clone)");
    }

    #[tokio::test]
    async fn test_empty_result_is_success() {
        let view = analyze_once(&Empty, "https://github.com/o/r").await.unwrap();
        assert!(snapshot_of(&view).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_url_rejected_before_request() {
        let err = analyze_once(&Failing, "").await.unwrap_err();
        assert_eq!(err.to_string(), "Repository URL must not be empty");
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.html");
        run_export(&Empty, "https://github.com/o/r", &output).await.unwrap();
        assert!(output.exists());
    }
}
