//! Item repository facade.
//!
//! View models talk to the backend through [`ItemRepository`] so they can be
//! driven by the real [`CatalogClient`] or by an in-memory double.

use async_trait::async_trait;

use crate::client::CatalogClient;
use crate::error::Result;
use crate::models::{Item, SubmissionPayload, SubmissionResponse};
use crate::traits::{Get, List, Submit};

/// Typed access to catalog items.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Fetch every item.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Fetch a single item.
    async fn get_item(&self, id: u64) -> Result<Item>;

    /// Submit the contact form for an item.
    async fn submit_form(&self, id: u64, payload: &SubmissionPayload)
        -> Result<SubmissionResponse>;
}

#[async_trait]
impl ItemRepository for CatalogClient {
    async fn list_items(&self) -> Result<Vec<Item>> {
        Item::list(self).await
    }

    async fn get_item(&self, id: u64) -> Result<Item> {
        Item::get(self, id).await
    }

    async fn submit_form(
        &self,
        id: u64,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionResponse> {
        Item::submit(self, id, payload).await
    }
}
