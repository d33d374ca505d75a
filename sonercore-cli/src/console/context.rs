use std::sync::Arc;

use tracing::debug;

use sonercore::render::{render_detail, render_file_table, render_summary, Style};
use sonercore::{
    run_analysis, AnalysisService, DetailView, NavigateAction, Navigator, Route, SummaryView,
};

use super::commands::{ConsoleCommand, HELP_TEXT};

/// Outcome of one console command.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Exit,
}

/// Console runtime state shared across command handlers.
pub struct ConsoleContext {
    service: Arc<dyn AnalysisService>,
    summary: SummaryView,
    navigator: Navigator,
    style: Style,
}

impl ConsoleContext {
    pub fn new(service: Arc<dyn AnalysisService>, repo_url: Option<String>, style: Style) -> Self {
        Self {
            service,
            summary: SummaryView::with_repo_url(repo_url.unwrap_or_default()),
            navigator: Navigator::new(),
            style,
        }
    }

    pub fn prompt_label(&self) -> String {
        let route = self.navigator.current().kind().path();
        match self.summary.snapshot() {
            Some(snapshot) => format!("sonercore[{} files={}]", route, snapshot.files().len()),
            None => format!("sonercore[{}]", route),
        }
    }

    pub async fn execute(&mut self, command: ConsoleCommand) -> Step {
        let output = match command {
            ConsoleCommand::Exit => return Step::Exit,
            ConsoleCommand::Help => format!("{}\n", HELP_TEXT),
            ConsoleCommand::Analyze { repo_url } => self.analyze(repo_url).await,
            ConsoleCommand::Summary => self.show_summary(),
            ConsoleCommand::Files => self.files(),
            ConsoleCommand::Open { file, function } => self.open(file, function),
            ConsoleCommand::Back => self.back(),
            ConsoleCommand::Forward => self.forward(),
            ConsoleCommand::Link => self.link(),
        };
        Step::Continue(output)
    }

    async fn analyze(&mut self, repo_url: Option<String>) -> String {
        if let Some(repo_url) = repo_url {
            self.summary.set_repo_url(repo_url);
        }
        if !self.summary.can_submit() {
            return "Provide a repository URL: analyze <url>\n".to_string();
        }
        if matches!(self.navigator.current(), Route::Details(_)) {
            self.navigator.dispatch(NavigateAction::ToSummary);
        }
        match run_analysis(&mut self.summary, self.service.as_ref()).await {
            Ok(()) => render_summary(&self.summary, self.style),
            Err(err) => format!("{}\n", err),
        }
    }

    fn show_summary(&mut self) -> String {
        if let Route::Details(context) = self.navigator.current() {
            let action = DetailView::resolve(context.as_ref()).back_action();
            self.navigator.dispatch(action);
        }
        render_summary(&self.summary, self.style)
    }

    fn files(&self) -> String {
        match self.summary.snapshot() {
            Some(snapshot) => render_file_table(snapshot),
            None => "No analysis yet.\n".to_string(),
        }
    }

    fn open(&mut self, file: usize, function: usize) -> String {
        if self.summary.snapshot().is_none() {
            return "No analysis yet.\n".to_string();
        }
        let selection = match (file.checked_sub(1), function.checked_sub(1)) {
            (Some(file_idx), Some(fn_idx)) => self.summary.select(file_idx, fn_idx),
            _ => None,
        };
        match selection {
            Some(context) => {
                debug!("open {}#{}", context.file.path, context.function.name);
                self.navigator.dispatch(NavigateAction::ToDetails(context));
                self.render_current()
            }
            None => format!("No function {} in file {}.\n", function, file),
        }
    }

    fn back(&mut self) -> String {
        if self.navigator.back() {
            self.render_current()
        } else {
            "Nothing to go back to.\n".to_string()
        }
    }

    fn forward(&mut self) -> String {
        if self.navigator.forward() {
            self.render_current()
        } else {
            "Nothing to go forward to.\n".to_string()
        }
    }

    fn link(&self) -> String {
        match DetailView::resolve(self.navigator.context()).link() {
            Some(link) => format!("{}\n", link.href),
            None => "No function open.\n".to_string(),
        }
    }

    fn render_current(&self) -> String {
        match self.navigator.current() {
            Route::Summary => render_summary(&self.summary, self.style),
            Route::Details(context) => {
                render_detail(&DetailView::resolve(context.as_ref()), self.style)
            }
        }
    }
}
