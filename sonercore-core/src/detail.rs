//! Details view resolution.

use serde::Serialize;

use crate::link::DeepLink;
use crate::model::Detail;
use crate::navigation::{NavigateAction, NavigationContext};
use crate::tier::{classify, Tier};

/// Everything the details screen shows for one function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDetail<'a> {
    pub name: &'a str,
    pub path: &'a str,
    pub score: i64,
    pub tier: Tier,
    pub source: &'a str,
    pub contributors: &'a [Detail],
    pub link: DeepLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView<'a> {
    /// Reached without a selection; only the way back is offered.
    Missing,
    Ready(FunctionDetail<'a>),
}

impl<'a> DetailView<'a> {
    pub fn resolve(context: Option<&'a NavigationContext>) -> Self {
        match context {
            None => DetailView::Missing,
            Some(context) => DetailView::Ready(FunctionDetail {
                name: &context.function.name,
                path: &context.file.path,
                score: context.function.score,
                tier: classify(context.function.score),
                source: &context.function.source,
                contributors: &context.function.details,
                link: DeepLink::new(
                    &context.repo_url,
                    &context.file.path,
                    context.function.start_line,
                    context.function.end_line,
                ),
            }),
        }
    }

    /// The action behind the screen's back control.
    pub fn back_action(&self) -> NavigateAction {
        NavigateAction::ToSummary
    }

    pub fn link(&self) -> Option<&DeepLink> {
        match self {
            DetailView::Ready(detail) => Some(&detail.link),
            DetailView::Missing => None,
        }
    }
}
