// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use tracing::trace;

use crate::locale::Locale;

/// The raw language signals carried by one inbound request.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleSignals<'a> {
	/// `Accept-Language` header value.
	pub accept_language: Option<&'a str>,
	/// Value of the locale cookie.
	pub cookie: Option<&'a str>,
	/// Value of the locale query parameter.
	pub query: Option<&'a str>,
}

impl<'a> LocaleSignals<'a> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_accept_language(mut self, value: &'a str) -> Self {
		self.accept_language = Some(value);
		self
	}

	pub fn with_cookie(mut self, value: &'a str) -> Self {
		self.cookie = Some(value);
		self
	}

	pub fn with_query(mut self, value: &'a str) -> Self {
		self.query = Some(value);
		self
	}
}

/// Resolve the active locale for a request.
///
/// Resolution order (highest to lowest priority):
/// 1. `Accept-Language` header, first listed entry whose two-letter prefix
///    is supported (quality weights are ignored)
/// 2. Locale cookie, if it is exactly a supported code
/// 3. Locale query parameter, if it is exactly a supported code
/// 4. `default`
///
/// # Example
///
/// ```
/// use mizan_common_i18n::{resolve, Locale, LocaleSignals};
///
/// // Header wins over the cookie
/// let signals = LocaleSignals::new().with_accept_language("en").with_cookie("ar");
/// assert_eq!(resolve(&signals, Locale::Ar), Locale::En);
///
/// // Cookie wins over the query parameter
/// let signals = LocaleSignals::new().with_cookie("en").with_query("ar");
/// assert_eq!(resolve(&signals, Locale::Ar), Locale::En);
///
/// // Nothing usable falls back to the default
/// let signals = LocaleSignals::new().with_accept_language("fr-FR");
/// assert_eq!(resolve(&signals, Locale::Ar), Locale::Ar);
/// ```
pub fn resolve(signals: &LocaleSignals<'_>, default: Locale) -> Locale {
	if let Some(locale) = signals
		.accept_language
		.filter(|h| !h.is_empty())
		.and_then(parse_accept_language)
	{
		trace!(%locale, "locale from accept-language");
		return locale;
	}

	if let Some(locale) = exact(signals.cookie) {
		trace!(%locale, "locale from cookie");
		return locale;
	}

	if let Some(locale) = exact(signals.query) {
		trace!(%locale, "locale from query parameter");
		return locale;
	}

	default
}

/// Pick the first supported language from an `Accept-Language` value.
///
/// Entries are taken in listed order; each is trimmed and its first two
/// characters are compared against the supported codes. A value without
/// separators is a single entry.
pub fn parse_accept_language(header: &str) -> Option<Locale> {
	header.split(',').find_map(|entry| {
		let prefix: String = entry.trim().chars().take(2).collect();
		Locale::from_code(&prefix)
	})
}

fn exact(value: Option<&str>) -> Option<Locale> {
	value.filter(|v| !v.is_empty()).and_then(Locale::from_code)
}
