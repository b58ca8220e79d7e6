//! Detail page: item fetch plus the feedback form state machine.

use serde::Serialize;

use super::{message_or, LoadState};
use crate::error::{CatalogError, Result};
use crate::models::{Item, SubmissionPayload, SubmissionResponse};
use crate::repository::ItemRepository;
use crate::validation::{Field, FieldErrors};

const LOAD_FAILED: &str = "Failed to load item.";
const SUBMIT_FAILED: &str = "Submission failed.";

/// Mutable state of the feedback form.
///
/// `submit_error` and `submit_success` are never both set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub payload: SubmissionPayload,
    pub field_errors: FieldErrors,
    pub submitting: bool,
    pub submit_error: Option<String>,
    pub submit_success: Option<String>,
}

impl FormState {
    fn clear_banners(&mut self) {
        self.submit_error = None;
        self.submit_success = None;
    }
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed or no item is loaded; nothing was sent.
    Blocked,
    Succeeded(String),
    Failed(String),
}

/// Render model for the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub status: LoadState,
    pub item: Option<Item>,
    pub form: FormState,
    pub can_submit: bool,
}

impl DetailView {
    pub fn submit_label(&self) -> &'static str {
        if self.form.submitting {
            "Submitting..."
        } else {
            "Submit"
        }
    }
}

/// State holder for one mounted detail page.
#[derive(Debug, Clone)]
pub struct DetailViewModel {
    item_id: Option<u64>,
    status: LoadState,
    item: Option<Item>,
    form: FormState,
}

impl DetailViewModel {
    /// Mount the page for a raw route parameter.
    ///
    /// A parameter that is not a non-negative integer fails immediately with
    /// "Invalid item id" and [`load`](Self::load) will not call the backend.
    pub fn mount(raw_id: &str) -> Self {
        match raw_id.trim().parse::<u64>() {
            Ok(id) => Self::for_item(id),
            Err(_) => {
                let err = CatalogError::InvalidItemId(raw_id.to_string());
                tracing::debug!(raw_id, "rejected item id");
                Self {
                    item_id: None,
                    status: LoadState::Failed(err.to_string()),
                    item: None,
                    form: FormState::default(),
                }
            }
        }
    }

    pub fn for_item(id: u64) -> Self {
        Self {
            item_id: Some(id),
            status: LoadState::Idle,
            item: None,
            form: FormState::default(),
        }
    }

    pub fn item_id(&self) -> Option<u64> {
        self.item_id
    }

    pub fn status(&self) -> &LoadState {
        &self.status
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Fetch the item. Runs at most once per mount.
    pub async fn load<R: ItemRepository + ?Sized>(&mut self, repo: &R) {
        let Some(id) = self.begin_load() else {
            return;
        };
        let result = repo.get_item(id).await;
        self.finish_load(result);
    }

    /// Move to `Loading` and return the id to fetch, unless the page was
    /// already loaded, is loading, or failed at mount.
    pub fn begin_load(&mut self) -> Option<u64> {
        if self.status != LoadState::Idle {
            return None;
        }
        let id = self.item_id?;
        self.status = LoadState::Loading;
        Some(id)
    }

    pub fn finish_load(&mut self, result: Result<Item>) {
        match result {
            Ok(item) => {
                tracing::debug!(id = item.id, "item loaded");
                self.item = Some(item);
                self.status = LoadState::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load item");
                self.status = LoadState::Failed(message_or(&err, LOAD_FAILED));
            }
        }
    }

    /// Record a keystroke: store the value, re-check that field and drop any
    /// previous submit banner.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let error = field.validate(&value);
        *field.value_mut(&mut self.form.payload) = value;
        self.form.field_errors.set(field, error);
        self.form.clear_banners();
    }

    pub fn can_submit(&self) -> bool {
        self.item.is_some() && !self.form.submitting && self.form.field_errors.is_empty()
    }

    /// Validate the whole form and, if it passes, enter the submitting state.
    ///
    /// Returns the item id and a snapshot of the payload to send.
    pub fn begin_submit(&mut self) -> Option<(u64, SubmissionPayload)> {
        self.form.clear_banners();

        let errors = FieldErrors::check(&self.form.payload);
        let valid = errors.is_empty();
        self.form.field_errors = errors;
        if !valid {
            tracing::debug!("submit blocked by field errors");
            return None;
        }

        let id = self.item.as_ref()?.id;
        self.form.submitting = true;
        Some((id, self.form.payload.clone()))
    }

    pub fn finish_submit(&mut self, result: Result<SubmissionResponse>) -> SubmitOutcome {
        self.form.submitting = false;

        match result {
            Ok(SubmissionResponse {
                success: true,
                message,
            }) => {
                tracing::debug!("submission accepted");
                self.form.payload = SubmissionPayload::default();
                self.form.field_errors = FieldErrors::default();
                self.form.submit_success = Some(message.clone());
                SubmitOutcome::Succeeded(message)
            }
            Ok(SubmissionResponse { message, .. }) => {
                let message = if message.trim().is_empty() {
                    SUBMIT_FAILED.to_string()
                } else {
                    message
                };
                tracing::warn!(%message, "submission rejected");
                self.form.submit_error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                let message = message_or(&err, SUBMIT_FAILED);
                self.form.submit_error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Validate, send, and record the result.
    pub async fn submit<R: ItemRepository + ?Sized>(&mut self, repo: &R) -> SubmitOutcome {
        let Some((id, payload)) = self.begin_submit() else {
            return SubmitOutcome::Blocked;
        };
        let result = repo.submit_form(id, &payload).await;
        self.finish_submit(result)
    }

    /// Snapshot the current state for rendering.
    pub fn derive(&self) -> DetailView {
        DetailView {
            status: self.status.clone(),
            item: self.item.clone(),
            form: self.form.clone(),
            can_submit: self.can_submit(),
        }
    }
}
