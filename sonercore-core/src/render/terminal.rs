//! Terminal renderer.

use std::fmt::Write as _;

use colored::Colorize;

use crate::detail::{DetailView, FunctionDetail};
use crate::model::{FileResult, FunctionResult};
use crate::render::table::{format_table, TableRow};
use crate::summary::{AnalysisSnapshot, DisplayState, SummaryView};
use crate::tier::{classify, Tier};

pub const EMPTY_RESULTS_NOTICE: &str = "No files found or analyzed.";
pub const NO_FUNCTIONS_NOTICE: &str = "No functions analyzed";
pub const MISSING_DETAIL_NOTICE: &str = "No function details available.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Colour when enabled and `NO_COLOR` is unset.
    pub fn detect(enabled: bool) -> Self {
        Self {
            color: enabled && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    fn tier(&self, text: &str, tier: Tier) -> String {
        if !self.color {
            return text.to_string();
        }
        match tier {
            Tier::Low => text.green().to_string(),
            Tier::Medium => text.yellow().to_string(),
            Tier::High => text.red().bold().to_string(),
        }
    }

    fn strong(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn muted(&self, text: &str) -> String {
        if self.color {
            text.bright_black().to_string()
        } else {
            text.to_string()
        }
    }

    fn alert(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Render whichever of the summary states is active.
pub fn render_summary(view: &SummaryView, style: Style) -> String {
    match view.display_state() {
        DisplayState::Idle => {
            style.muted("No analysis yet. Provide a repository URL to analyze.\n")
        }
        DisplayState::Loading => format!("Analyzing {}...\n", view.repo_url()),
        DisplayState::Error(message) => format!("{}\n", style.alert(message)),
        DisplayState::Results(snapshot) => render_results(snapshot, style),
    }
}

/// Render the file cards of a snapshot. Numbers are 1-based selectors.
pub fn render_results(snapshot: &AnalysisSnapshot, style: Style) -> String {
    if snapshot.is_empty() {
        return format!("{}\n", EMPTY_RESULTS_NOTICE);
    }

    let mut out = String::new();
    for (file_idx, file) in snapshot.files().iter().enumerate() {
        render_file_card(&mut out, file_idx + 1, file, style);
    }
    out
}

fn render_file_card(out: &mut String, number: usize, file: &FileResult, style: Style) {
    let total = format!("Total Complexity: {}", file.complexity);
    let _ = writeln!(
        out,
        "[{}] {}  {}",
        number,
        style.strong(&file.path),
        style.tier(&total, classify(file.complexity))
    );

    if !file.has_functions() {
        let _ = writeln!(out, "    {}", style.muted(NO_FUNCTIONS_NOTICE));
        return;
    }

    for (fn_idx, function) in file.functions.iter().enumerate() {
        render_function_row(out, fn_idx + 1, function, style);
    }
}

fn render_function_row(out: &mut String, number: usize, function: &FunctionResult, style: Style) {
    let score = function.score.to_string();
    let _ = writeln!(
        out,
        "    {}. func {}  {}",
        number,
        function.name,
        style.tier(&score, classify(function.score))
    );
    let count = function.contributor_count();
    if count > 0 {
        let _ = writeln!(
            out,
            "       {}",
            style.muted(&format!("{} complexity contributors", count))
        );
    }
}

/// Compact one-line-per-file listing.
pub fn render_file_table(snapshot: &AnalysisSnapshot) -> String {
    if snapshot.is_empty() {
        return format!("{}\n", EMPTY_RESULTS_NOTICE);
    }
    let rows: Vec<TableRow> = snapshot
        .files()
        .iter()
        .enumerate()
        .map(|(idx, file)| {
            TableRow::from(vec![
                (idx + 1).to_string(),
                file.path.clone(),
                file.functions.len().to_string(),
                file.complexity.to_string(),
                classify(file.complexity).to_string(),
            ])
        })
        .collect();
    format_table(&["#", "path", "functions", "complexity", "tier"], &rows)
}

/// Render the details screen, or its fallback when no selection is present.
pub fn render_detail(view: &DetailView<'_>, style: Style) -> String {
    match view {
        DetailView::Missing => format!(
            "{}\n{}\n",
            MISSING_DETAIL_NOTICE,
            style.muted("<- Go Back to results")
        ),
        DetailView::Ready(detail) => render_function_detail(detail, style),
    }
}

fn render_function_detail(detail: &FunctionDetail<'_>, style: Style) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style.strong(&format!("func {}", detail.name)));
    let _ = writeln!(out, "{}", style.muted(detail.path));
    let score = format!("Score: {}", detail.score);
    let _ = writeln!(out, "{}", style.tier(&score, detail.tier));
    let _ = writeln!(out, "View on GitHub -> {}", detail.link.href);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style.strong("Source Code"));
    for line in detail.source.lines() {
        let _ = writeln!(out, "  {}", line);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style.strong("Complexity Details"));
    for contributor in detail.contributors {
        let _ = writeln!(out, "  {}", style.alert(&format!("+{}", contributor.cost)));
        let _ = writeln!(out, "  {}", contributor.message);
        let _ = writeln!(out, "  {}", style.muted(&format!("Line {}", contributor.line)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnalysisError;
    use crate::model::AnalysisResponse;
    use crate::navigation::NavigationContext;

    fn settled(response: AnalysisResponse) -> SummaryView {
        let mut view = SummaryView::with_repo_url("https://github.com/acme/widget.git");
        let pending = view.begin().unwrap();
        view.settle(pending, Ok(response));
        view
    }

    fn two_files() -> AnalysisResponse {
        serde_json::from_value(serde_json::json!({
            "files": [
                {"path": "pkg/foo.go", "complexity": 18, "functions": [
                    {"name": "Parse", "score": 18, "startLine": 10, "endLine": 25,
                     "source": "func Parse() {\n\treturn\n}",
                     "details": [
                        {"Line": 11, "Message": "if", "Cost": 1},
                        {"Line": 13, "Message": "for", "Cost": 17}
                     ]},
                    {"name": "Noop", "score": 0, "startLine": 27, "endLine": 28,
                     "source": "func Noop() {}", "details": []}
                ]},
                {"path": "pkg/empty.go", "complexity": 0, "functions": null}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_idle_and_loading() {
        let mut view = SummaryView::with_repo_url("https://github.com/o/r");
        assert!(render_summary(&view, Style::plain()).starts_with("No analysis yet"));
        let pending = view.begin().unwrap();
        assert_eq!(
            render_summary(&view, Style::plain()),
            "Analyzing https://github.com/o/r...\n"
        );
        view.settle(pending, Ok(AnalysisResponse::default()));
    }

    #[test]
    fn test_empty_results_notice_is_not_error() {
        let view = settled(AnalysisResponse::default());
        assert_eq!(render_summary(&view, Style::plain()), "No files found or analyzed.\n");
    }

    #[test]
    fn test_error_is_shown_alone() {
        let mut view = settled(two_files());
        let pending = view.begin().unwrap();
        view.settle(pending, Err(AnalysisError::status(500, "Internal Server Error", "boom")));
        let out = render_summary(&view, Style::plain());
        assert_eq!(out, "Error: Internal Server Error (boom)\n");
        assert!(!out.contains("pkg/foo.go"));
    }

    #[test]
    fn test_file_cards() {
        let view = settled(two_files());
        let out = render_summary(&view, Style::plain());
        let expected = "\
[1] pkg/foo.go  Total Complexity: 18
    1. func Parse  18
       2 complexity contributors
    2. func Noop  0
[2] pkg/empty.go  Total Complexity: 0
    No functions analyzed
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_file_table() {
        let view = settled(two_files());
        let table = render_file_table(view.snapshot().unwrap());
        assert!(table.contains(" 1 | pkg/foo.go   | 2         | 18         | high "));
        assert!(table.contains(" 2 | pkg/empty.go | 0         | 0          | low  "));
    }

    #[test]
    fn test_detail_screen() {
        let view = settled(two_files());
        let context: NavigationContext = view.select(0, 0).unwrap();
        let out = render_detail(&DetailView::resolve(Some(&context)), Style::plain());
        let expected = "\
func Parse
pkg/foo.go
Score: 18
View on GitHub -> https://github.com/acme/widget/blob/HEAD/pkg/foo.go#L10-L25

Source Code
  func Parse() {
  \treturn
  }

Complexity Details
  +1
  if
  Line 11
  +17
  for
  Line 13
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_detail_fallback() {
        let out = render_detail(&DetailView::resolve(None), Style::plain());
        assert!(out.starts_with("No function details available."));
        assert!(out.contains("Go Back"));
    }

    #[test]
    fn test_colour_only_when_enabled() {
        let view = settled(two_files());
        let plain = render_summary(&view, Style::plain());
        assert!(!plain.contains('\u{1b}'));
    }

    #[test]
    fn test_tier_colours() {
        colored::control::set_override(true);
        let style = Style { color: true };
        assert_eq!(style.tier("x", Tier::Low), "\u{1b}[32mx\u{1b}[0m");
        assert_eq!(style.tier("x", Tier::Medium), "\u{1b}[33mx\u{1b}[0m");
        assert_eq!(style.tier("x", Tier::High), "\u{1b}[1;31mx\u{1b}[0m");
    }

    #[test]
    fn test_summary_total_and_score_share_tier_colour() {
        colored::control::set_override(true);
        let view = settled(two_files());
        let out = render_summary(&view, Style { color: true });
        assert!(out.contains("\u{1b}[1;31mTotal Complexity: 18\u{1b}[0m"));
        assert!(out.contains("func Parse  \u{1b}[1;31m18\u{1b}[0m"));
        assert!(out.contains("func Noop  \u{1b}[32m0\u{1b}[0m"));
        assert!(out.contains("\u{1b}[32mTotal Complexity: 0\u{1b}[0m"));
    }
}
