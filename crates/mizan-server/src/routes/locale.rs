// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Locale discovery and selection handlers.

use axum::{
	extract::Path,
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use chrono::Utc;
use mizan_common_i18n::{available_locales, t, Locale, LocaleInfo};
use serde::Serialize;

use crate::i18n::RequestLocale;
use crate::resources::rfc3339;

#[derive(Debug, Serialize)]
pub struct LocaleListResponse {
	pub current_locale: Locale,
	pub supported_locales: &'static [LocaleInfo],
	pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct LocaleUpdatedResponse {
	pub message: String,
	pub locale: Locale,
	pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct InvalidLocaleResponse {
	pub message: String,
	pub supported_locales: Vec<&'static str>,
}

/// GET /api/locale - Current request locale and the supported locales.
pub async fn list_locales(RequestLocale(locale): RequestLocale) -> Json<LocaleListResponse> {
	Json(LocaleListResponse {
		current_locale: locale,
		supported_locales: available_locales(),
		timestamp: rfc3339(Utc::now()),
	})
}

/// POST /api/locale/{locale} - Select a locale.
///
/// The confirmation is worded in the chosen locale. The locale cookie still
/// carries the locale resolved for this request; clients apply the choice by
/// sending it on later requests. Unsupported codes get a 422 whose message is
/// in the request locale.
pub async fn set_locale(
	RequestLocale(current): RequestLocale,
	Path(code): Path<String>,
) -> Response {
	let Some(locale) = Locale::from_code(&code) else {
		tracing::debug!(code = %code, "rejected unsupported locale");
		return (
			StatusCode::UNPROCESSABLE_ENTITY,
			Json(InvalidLocaleResponse {
				message: t(current, "server.locale.invalid"),
				supported_locales: Locale::ALL.iter().map(|l| l.code()).collect(),
			}),
		)
			.into_response();
	};

	tracing::info!(from = %current, to = %locale, "locale selected");

	Json(LocaleUpdatedResponse {
		message: t(locale, "server.locale.updated"),
		locale,
		timestamp: rfc3339(Utc::now()),
	})
	.into_response()
}
