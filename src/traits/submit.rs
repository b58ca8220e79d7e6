//! Submit trait for posting a payload against an entity.

use async_trait::async_trait;

use crate::client::CatalogClient;
use crate::error::Result;

/// Send a payload to an entity and receive the backend's verdict.
///
/// # Example
///
/// ```ignore
/// use itemcat::{CatalogClient, Item, Submit, SubmissionPayload};
///
/// let client = CatalogClient::from_env()?;
/// let payload = SubmissionPayload::new("Ada", "ada@example.com", "Hello there!");
/// let response = Item::submit(&client, 1, &payload).await?;
/// ```
#[async_trait]
pub trait Submit: Sized {
    /// Request body type.
    type Payload: Sync;

    /// Decoded response type.
    type Response;

    /// Submit the payload for the entity with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status. A 2xx
    /// response carrying a business-level rejection is returned as `Ok`.
    async fn submit(
        client: &CatalogClient,
        id: u64,
        payload: &Self::Payload,
    ) -> Result<Self::Response>;
}
