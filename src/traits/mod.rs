//! Trait definitions for catalog operations.
//!
//! Each entity type implements the traits it supports, encapsulating
//! endpoint details in the implementations.

mod get;
mod list;
mod submit;

pub use get::Get;
pub use list::List;
pub use submit::Submit;
