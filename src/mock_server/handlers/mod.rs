//! HTTP request handlers for the mock server.

pub mod items;

pub use items::*;
