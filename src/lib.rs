//! Digital Item Catalog client library.
//!
//! A Rust client for the catalog REST API together with the page state
//! behind a browsing front end: a searchable, paginated item list and an
//! item detail page with a validated feedback form.
//!
//! # Quick Start
//!
//! ```no_run
//! use itemcat::{CatalogClient, DetailViewModel, Field, ListViewModel};
//!
//! #[tokio::main]
//! async fn main() -> itemcat::Result<()> {
//!     // Create client from environment variables
//!     let client = CatalogClient::from_env()?;
//!
//!     // Load and search the list
//!     let mut list = ListViewModel::new();
//!     list.load(&client).await;
//!     list.set_query("mouse");
//!     println!("{} matches", list.derive().filtered_count);
//!
//!     // Open an item and send feedback
//!     let mut detail = DetailViewModel::mount("1");
//!     detail.load(&client).await;
//!     detail.set_field(Field::Name, "Ada");
//!     detail.set_field(Field::Email, "ada@example.com");
//!     detail.set_field(Field::Message, "Does it work on glass?");
//!     let outcome = detail.submit(&client).await;
//!     println!("{outcome:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`CatalogClient`] performs HTTP and normalizes error bodies.
//! - [`Get`], [`List`] and [`Submit`] are implemented by [`Item`].
//! - [`ItemRepository`] is the seam the view models depend on.
//! - [`ListViewModel`] and [`DetailViewModel`] hold page state and expose a
//!   pure `derive()` snapshot for rendering.
//!
//! # Configuration
//!
//! - `ITEMCAT_API_URL` (optional) - Base URL (defaults to `http://localhost:8000`)

pub mod browse;
pub mod cli;
mod client;
mod error;
#[cfg(feature = "test-server")]
pub mod mock_server;
mod models;
pub mod output;
mod pagination;
mod repository;
pub mod settings;
mod traits;
pub mod validation;
mod view;

// Re-export core types
pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use pagination::{clamp_page, total_pages, Page, DEFAULT_PAGE_SIZE};
pub use repository::ItemRepository;

// Re-export traits
pub use traits::{Get, List, Submit};

// Re-export models
pub use models::{Item, SubmissionPayload, SubmissionResponse};

// Re-export view models
pub use validation::{Field, FieldErrors};
pub use view::{
    filter_items, DetailView, DetailViewModel, FormState, ListState, ListView, ListViewModel,
    LoadState, SubmitOutcome,
};

pub use output::{PrettyPrint, Renderer};
pub use settings::{FileSettingsStore, MemorySettingsStore, SettingsStore, Theme, ThemeService};
