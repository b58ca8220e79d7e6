//! Item endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::{Item, SubmissionPayload, SubmissionResponse};

const MESSAGE_MAX_CHARS: usize = 500;

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Item not found" })),
    )
        .into_response()
}

/// 422 with a list of `{loc, msg, type}` entries, like the real backend.
fn unprocessable(problems: Vec<serde_json::Value>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": problems })),
    )
        .into_response()
}

fn problem(loc: &[&str], msg: &str, kind: &str) -> serde_json::Value {
    json!({ "loc": loc, "msg": msg, "type": kind })
}

fn parse_id(raw: &str) -> Result<u64, Response> {
    raw.parse::<u64>().map_err(|_| {
        unprocessable(vec![problem(
            &["path", "item_id"],
            "value is not a valid integer",
            "type_error.integer",
        )])
    })
}

/// Server-side rules: looser than the client's, stricter on message length.
fn check_submission(payload: &SubmissionPayload) -> Vec<serde_json::Value> {
    let mut problems = Vec::new();

    if payload.name.is_empty() {
        problems.push(problem(
            &["body", "name"],
            "ensure this value has at least 1 characters",
            "value_error.any_str.min_length",
        ));
    }

    let email_ok = payload
        .email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    if !email_ok {
        problems.push(problem(
            &["body", "email"],
            "value is not a valid email address",
            "value_error.email",
        ));
    }

    let message_len = payload.message.chars().count();
    if message_len == 0 {
        problems.push(problem(
            &["body", "message"],
            "ensure this value has at least 1 characters",
            "value_error.any_str.min_length",
        ));
    } else if message_len > MESSAGE_MAX_CHARS {
        problems.push(problem(
            &["body", "message"],
            "ensure this value has at most 500 characters",
            "value_error.any_str.max_length",
        ));
    }

    problems
}

/// GET /
pub async fn root() -> impl IntoResponse {
    Json(json!({ "status": "ok", "message": "Digital Item Catalog API" }))
}

/// GET /items
pub async fn list_items(State(state): State<Arc<RwLock<MockState>>>) -> impl IntoResponse {
    let state = state.read().await;
    let items: Vec<Item> = state.list_items().into_iter().cloned().collect();
    (StatusCode::OK, Json(items))
}

/// GET /items/{id}
pub async fn get_item(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let state = state.read().await;
    match state.get_item(id) {
        Some(item) => (StatusCode::OK, Json(item.clone())).into_response(),
        None => not_found(),
    }
}

/// POST /items/{id}/submit
pub async fn submit_item(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(raw_id): Path<String>,
    body: Result<Json<SubmissionPayload>, JsonRejection>,
) -> Response {
    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let payload = match body {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            return unprocessable(vec![problem(
                &["body"],
                &rejection.body_text(),
                "value_error.jsondecode",
            )])
        }
    };

    let problems = check_submission(&payload);
    if !problems.is_empty() {
        return unprocessable(problems);
    }

    let mut state = state.write().await;
    let Some(item_name) = state.get_item(id).map(|item| item.name.clone()) else {
        return not_found();
    };

    if let Some(message) = state.reject_submissions.clone() {
        return Json(SubmissionResponse {
            success: false,
            message,
        })
        .into_response();
    }

    tracing::info!(item_id = id, name = %payload.name, "received submission");
    let message = format!(
        "Thank you {}, your message for '{}' was received.",
        payload.name, item_name
    );
    state.record_submission(id, payload);

    Json(SubmissionResponse {
        success: true,
        message,
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_submission_accepts_backend_minimums() {
        let payload = SubmissionPayload::new("A", "a@b.c", "x");
        assert!(check_submission(&payload).is_empty());
    }

    #[test]
    fn test_check_submission_reports_each_field() {
        let payload = SubmissionPayload::new("", "nope", &"x".repeat(501));
        let problems = check_submission(&payload);
        assert_eq!(problems.len(), 3);
        assert_eq!(problems[2]["loc"][1], "message");
    }
}
