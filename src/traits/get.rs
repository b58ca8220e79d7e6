//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::CatalogClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```ignore
/// use itemcat::{CatalogClient, Item, Get};
///
/// let client = CatalogClient::from_env()?;
/// let item = Item::get(&client, 1).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    /// A missing entity surfaces the backend's message verbatim.
    async fn get(client: &CatalogClient, id: Self::Id) -> Result<Self>;
}
