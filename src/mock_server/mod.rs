//! Mock catalog API server for E2E testing.
//!
//! This module provides an in-memory server that behaves like the catalog
//! backend. Unlike wiremock, which mocks at the HTTP level per test, this
//! server keeps state across requests, so submissions can be inspected after
//! a workflow has run.
//!
//! # Example
//!
//! ```ignore
//! use itemcat::mock_server::MockServer;
//! use itemcat::{CatalogClient, Get, Item};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = CatalogClient::new(server.url()).unwrap();
//!
//!     // Server comes with the reference catalog
//!     let item = Item::get(&client, 1).await.unwrap();
//!     assert_eq!(item.name, "Wireless Mouse");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::{MockState, ReceivedSubmission};
