// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Maps any crate's error to an HTTP response (spec §7). Every producing
//! crate exposes `kind() -> ErrorKind`; this is the only place that knows
//! about `axum::http::StatusCode`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gst_core::ErrorKind;
use serde_json::json;

pub struct ApiError {
    kind: ErrorKind,
    detail: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self { kind, detail: detail.into() }
    }

    pub fn rate_limited() -> Self {
        Self::new(ErrorKind::RateLimited, "Too many requests. Try again later.")
    }
}

impl From<gst_storage::StoreError> for ApiError {
    fn from(err: gst_storage::StoreError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.kind.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
