//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::CatalogClient;
use crate::error::Result;

/// Fetch every entity of a kind in one request.
///
/// The catalog backend does not paginate; paging happens client-side in
/// [`ListViewModel`](crate::ListViewModel).
///
/// # Example
///
/// ```ignore
/// use itemcat::{CatalogClient, Item, List};
///
/// let client = CatalogClient::from_env()?;
/// let items = Item::list(&client).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// List all entities.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. An empty collection is not an
    /// error.
    async fn list(client: &CatalogClient) -> Result<Vec<Self>>;
}
