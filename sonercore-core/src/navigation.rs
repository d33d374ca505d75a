//! Summary → details navigation.
//!
//! The selected function travels as the payload of the navigation action.
//! History only remembers route kinds, so leaving the details route drops
//! its context and coming back through history lands on the empty state.

use serde::Serialize;
use tracing::debug;

use crate::model::{FileResult, FunctionResult};

/// The selection handed from the summary view to the details view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationContext {
    pub file: FileResult,
    pub function: FunctionResult,
    pub repo_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    Summary,
    Details,
}

impl RouteKind {
    pub fn path(&self) -> &'static str {
        match self {
            RouteKind::Summary => "/",
            RouteKind::Details => "/details",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Summary,
    /// `None` when reached without a fresh selection.
    Details(Option<NavigationContext>),
}

impl Route {
    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Summary => RouteKind::Summary,
            Route::Details(_) => RouteKind::Details,
        }
    }

    fn enter(kind: RouteKind) -> Self {
        match kind {
            RouteKind::Summary => Route::Summary,
            RouteKind::Details => Route::Details(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateAction {
    ToDetails(NavigationContext),
    ToSummary,
}

#[derive(Debug)]
pub struct Navigator {
    current: Route,
    back: Vec<RouteKind>,
    forward: Vec<RouteKind>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Route::Summary,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn context(&self) -> Option<&NavigationContext> {
        match &self.current {
            Route::Details(context) => context.as_ref(),
            Route::Summary => None,
        }
    }

    /// Apply a navigation action, pushing the current route onto history.
    pub fn dispatch(&mut self, action: NavigateAction) {
        let next = match action {
            NavigateAction::ToDetails(context) => Route::Details(Some(context)),
            NavigateAction::ToSummary => Route::Summary,
        };
        debug!("navigate {} -> {}", self.current.kind().path(), next.kind().path());
        self.back.push(self.current.kind());
        self.forward.clear();
        self.current = next;
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// History back. Returns false when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        match self.back.pop() {
            Some(kind) => {
                self.forward.push(self.current.kind());
                debug!("history back to {}", kind.path());
                self.current = Route::enter(kind);
                true
            }
            None => false,
        }
    }

    /// History forward. Returns false when there is nothing ahead.
    pub fn forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(kind) => {
                self.back.push(self.current.kind());
                debug!("history forward to {}", kind.path());
                self.current = Route::enter(kind);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> NavigationContext {
        let function = FunctionResult {
            name: "Run".to_string(),
            score: 2,
            details: Vec::new(),
            start_line: 1,
            end_line: 4,
            source: "func Run() {}".to_string(),
        };
        NavigationContext {
            file: FileResult {
                path: "main.go".to_string(),
                functions: vec![function.clone()],
                complexity: 2,
            },
            function,
            repo_url: "https://github.com/o/r".to_string(),
        }
    }

    #[test]
    fn test_starts_on_summary() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), &Route::Summary);
        assert!(nav.context().is_none());
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_selection_carries_context() {
        let mut nav = Navigator::new();
        nav.dispatch(NavigateAction::ToDetails(context()));
        assert_eq!(nav.current().kind(), RouteKind::Details);
        assert_eq!(nav.context().map(|c| c.function.name.as_str()), Some("Run"));
    }

    #[test]
    fn test_back_then_forward_loses_context() {
        let mut nav = Navigator::new();
        nav.dispatch(NavigateAction::ToDetails(context()));
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Summary);
        assert!(nav.forward());
        assert_eq!(nav.current(), &Route::Details(None));
        assert!(nav.context().is_none());
    }

    #[test]
    fn test_dispatch_clears_forward_history() {
        let mut nav = Navigator::new();
        nav.dispatch(NavigateAction::ToDetails(context()));
        nav.back();
        nav.dispatch(NavigateAction::ToDetails(context()));
        assert!(!nav.can_go_forward());
        assert!(!nav.forward());
    }

    #[test]
    fn test_back_on_empty_history() {
        let mut nav = Navigator::new();
        assert!(!nav.back());
        assert_eq!(nav.current(), &Route::Summary);
    }
}
