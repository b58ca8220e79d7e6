//! View models for the list and detail pages.
//!
//! Each page owns its view model. State changes go through methods on the
//! model, and rendering reads a plain snapshot produced by `derive()`.

mod detail;
mod list;

use serde::Serialize;

pub use detail::{DetailView, DetailViewModel, FormState, SubmitOutcome};
pub use list::{filter_items, ListState, ListView, ListViewModel};

/// Progress of a page's initial fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "error", rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Error text shown to the user, or `fallback` when the error has none.
pub(crate) fn message_or(err: &crate::CatalogError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
