//! Mock server state management.
//!
//! Provides the in-memory data store for the mock catalog server.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Item, SubmissionPayload};

/// A submission the server accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedSubmission {
    pub item_id: u64,
    pub payload: SubmissionPayload,
}

/// Shared state for the mock server.
///
/// Wrapped in `Arc<RwLock<_>>` for concurrent access from handlers and tests.
#[derive(Debug, Default)]
pub struct MockState {
    /// Items indexed by id, listed in id order.
    pub items: BTreeMap<u64, Item>,

    /// Accepted submissions, oldest first.
    pub submissions: Vec<ReceivedSubmission>,

    /// When set, every well-formed submission gets `success: false` with this
    /// message.
    pub reject_submissions: Option<String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add an item to the state.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.id, item);
        self
    }

    /// Answer submissions with a business-level rejection.
    pub fn rejecting_submissions(mut self, message: &str) -> Self {
        self.reject_submissions = Some(message.to_string());
        self
    }

    /// Get an item by id.
    pub fn get_item(&self, id: u64) -> Option<&Item> {
        self.items.get(&id)
    }

    /// List all items in id order.
    pub fn list_items(&self) -> Vec<&Item> {
        self.items.values().collect()
    }

    /// Record an accepted submission.
    pub fn record_submission(&mut self, item_id: u64, payload: SubmissionPayload) {
        self.submissions.push(ReceivedSubmission { item_id, payload });
    }
}
