// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error type and its HTTP representation.
//!
//! Messages carried by the variants are already localized; callers build
//! them with [`mizan_common_i18n::t`] in the request locale.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::{Deserialize, Serialize};

/// JSON error body: `{"error": "<code>", "message": "<localized text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error("not found: {0}")]
	NotFound(String),

	#[error("method not allowed: {0}")]
	MethodNotAllowed(String),
}

impl ServerError {
	pub fn status(&self) -> StatusCode {
		match self {
			ServerError::NotFound(_) => StatusCode::NOT_FOUND,
			ServerError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
		}
	}

	fn code(&self) -> &'static str {
		match self {
			ServerError::NotFound(_) => "not_found",
			ServerError::MethodNotAllowed(_) => "method_not_allowed",
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status();
		tracing::debug!(error = %self, %status, "request rejected");

		let code = self.code();
		let message = match self {
			ServerError::NotFound(m) | ServerError::MethodNotAllowed(m) => m,
		};

		(
			status,
			Json(ErrorResponse {
				error: code.to_string(),
				message,
			}),
		)
			.into_response()
	}
}
