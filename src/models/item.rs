//! Item model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::CatalogClient;
use crate::error::Result;
use crate::models::{SubmissionPayload, SubmissionResponse};
use crate::traits::{Get, List, Submit};

/// A catalog item.
///
/// Items are server-assigned and immutable once fetched; a refetch replaces
/// the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique, server-assigned id.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// One-line summary shown in the list.
    pub short_description: String,

    /// Long description shown on the detail page.
    pub full_description: String,
}

impl Item {
    /// Client-side route for this item's detail page.
    pub fn route(&self) -> String {
        format!("/items/{}", self.id)
    }

    /// Case-insensitive match of an already lowercased needle against the
    /// name or short description.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.short_description.to_lowercase().contains(needle)
    }
}

#[async_trait]
impl List for Item {
    #[tracing::instrument(skip(client))]
    async fn list(client: &CatalogClient) -> Result<Vec<Self>> {
        let items: Vec<Item> = client.get("items").await?;
        tracing::debug!(count = items.len(), "fetched items");
        Ok(items)
    }
}

#[async_trait]
impl Get for Item {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &CatalogClient, id: u64) -> Result<Self> {
        client.get(&format!("items/{id}")).await
    }
}

#[async_trait]
impl Submit for Item {
    type Payload = SubmissionPayload;
    type Response = SubmissionResponse;

    #[tracing::instrument(skip(client, payload))]
    async fn submit(
        client: &CatalogClient,
        id: u64,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionResponse> {
        client.post(&format!("items/{id}/submit"), payload).await
    }
}
