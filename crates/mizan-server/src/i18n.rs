// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Per-request locale negotiation.
//!
//! [`locale_middleware`] runs before every handler. It resolves the request
//! locale from the `Accept-Language` header, the locale cookie and the locale
//! query parameter, stores it in the request extensions as a
//! [`RequestLocale`], and on the way out mirrors it into a persistent cookie
//! so later requests without a header keep the same language.
//!
//! Handlers read the locale with the [`RequestLocale`] extractor; nothing is
//! stored outside the request.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
	extract::{FromRequestParts, Request, State},
	http::{
		header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE},
		request::Parts,
		HeaderMap, HeaderValue,
	},
	middleware::Next,
	response::Response,
};
use mizan_common_i18n::{resolve, Locale, LocaleSignals, DEFAULT_LOCALE};
use mizan_server_config::LocaleConfig;
use tracing::{debug, warn};

/// The locale resolved for the current request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

impl RequestLocale {
	pub fn locale(self) -> Locale {
		self.0
	}
}

impl<S> FromRequestParts<S> for RequestLocale
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(parts
			.extensions
			.get::<RequestLocale>()
			.copied()
			.unwrap_or(RequestLocale(DEFAULT_LOCALE)))
	}
}

/// Resolve the locale for a request from its headers and query string.
pub fn resolve_request_locale(settings: &LocaleConfig, headers: &HeaderMap, query: Option<&str>) -> Locale {
	let header = accept_language(headers);
	let cookie = extract_cookie(headers, &settings.cookie_name);
	let query = query.and_then(|q| query_param(q, &settings.query_param));

	let signals = LocaleSignals {
		accept_language: header.as_deref(),
		cookie: cookie.as_deref(),
		query: query.as_deref(),
	};

	resolve(&signals, settings.default_locale)
}

/// Middleware that resolves the request locale and persists it in a cookie.
pub async fn locale_middleware(
	State(settings): State<Arc<LocaleConfig>>,
	mut request: Request,
	next: Next,
) -> Response {
	let locale = resolve_request_locale(&settings, request.headers(), request.uri().query());
	debug!(%locale, path = %request.uri().path(), "resolved request locale");

	request.extensions_mut().insert(RequestLocale(locale));

	let mut response = next.run(request).await;

	match HeaderValue::from_str(&locale_cookie(&settings, locale)) {
		Ok(value) => {
			response.headers_mut().append(SET_COOKIE, value);
		}
		Err(e) => warn!(error = %e, "failed to build locale cookie"),
	}

	response
}

/// Build the `Set-Cookie` value carrying `locale`.
///
/// The cookie is readable from client-side scripts so the frontend can pick
/// the same language.
pub fn locale_cookie(settings: &LocaleConfig, locale: Locale) -> String {
	format!(
		"{}={}; Path=/; Max-Age={}; SameSite=Lax",
		settings.cookie_name,
		locale.code(),
		settings.cookie_max_age_secs
	)
}

/// All `Accept-Language` lines joined into one list.
///
/// Bytes outside visible ASCII are decoded lossily so one odd entry does not
/// hide the others.
pub fn accept_language(headers: &HeaderMap) -> Option<String> {
	let lines: Vec<_> = headers
		.get_all(ACCEPT_LANGUAGE)
		.iter()
		.map(|v| String::from_utf8_lossy(v.as_bytes()))
		.collect();

	(!lines.is_empty()).then(|| lines.join(","))
}

/// Extract a cookie value by name from the Cookie header.
///
/// Pairs are split on raw bytes, so a non-ASCII sibling cookie does not hide
/// the one asked for.
pub fn extract_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
	headers
		.get_all(COOKIE)
		.iter()
		.flat_map(|h| h.as_bytes().split(|&b| b == b';'))
		.find_map(|pair| {
			let pair = String::from_utf8_lossy(pair);
			let (name, value) = pair.trim().split_once('=')?;
			(name == cookie_name).then(|| value.to_string())
		})
}

/// Extract the first value of `name` from a raw query string.
pub fn query_param(query: &str, name: &str) -> Option<String> {
	url::form_urlencoded::parse(query.as_bytes())
		.find(|(key, _)| key == name)
		.map(|(_, value)| value.into_owned())
}
