//! Response envelopes: `{"status-code": N, "entity": {...}}` for both outcomes.

use super::*;

pub(super) fn entity(value: serde_json::Value) -> Response {
    (
        StatusCode::OK,
        Json(json!({"status-code": 200, "entity": value})),
    )
        .into_response()
}

pub(super) fn message(msg: impl Into<String>) -> Response {
    entity(json!({"message": msg.into()}))
}

pub(super) fn error(status: StatusCode, msg: impl Into<String>) -> Response {
    (
        status,
        Json(json!({"status-code": status.as_u16(), "entity": {"message": msg.into()}})),
    )
        .into_response()
}

pub(super) fn bad_request(msg: impl Into<String>) -> Response {
    error(StatusCode::BAD_REQUEST, msg)
}

pub(super) fn not_found(msg: impl Into<String>) -> Response {
    error(StatusCode::NOT_FOUND, msg)
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    error(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err))
}
