// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::resources::rfc3339;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
	pub status: String,
	pub version: String,
	pub timestamp: String,
}

/// GET /health - Liveness check.
pub async fn health_check() -> impl IntoResponse {
	tracing::trace!("health_check");

	(
		StatusCode::OK,
		Json(HealthResponse {
			status: "healthy".to_string(),
			version: env!("CARGO_PKG_VERSION").to_string(),
			timestamp: rfc3339(Utc::now()),
		}),
	)
}
