//! Catalog entity models.

mod item;
mod submission;

pub use item::Item;
pub use submission::{SubmissionPayload, SubmissionResponse};
