// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Embedded message catalogs.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{error, warn};

use crate::locale::Locale;

type Messages = HashMap<String, String>;

const EN_SOURCE: &str = include_str!("../locales/en/messages.toml");
const AR_SOURCE: &str = include_str!("../locales/ar/messages.toml");

static CATALOGS: Lazy<HashMap<Locale, Messages>> = Lazy::new(|| {
	Locale::ALL
		.into_iter()
		.map(|locale| (locale, load(locale, source(locale))))
		.collect()
});

fn source(locale: Locale) -> &'static str {
	match locale {
		Locale::En => EN_SOURCE,
		Locale::Ar => AR_SOURCE,
	}
}

fn load(locale: Locale, source: &str) -> Messages {
	match parse(source) {
		Ok(messages) => messages,
		Err(e) => {
			error!(%locale, error = %e, "failed to parse message catalog");
			Messages::new()
		}
	}
}

fn parse(source: &str) -> Result<Messages, toml::de::Error> {
	let table: toml::Table = toml::from_str(source)?;
	let mut messages = Messages::new();
	flatten("", &table, &mut messages);
	Ok(messages)
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut Messages) {
	for (key, value) in table {
		let path = if prefix.is_empty() {
			key.clone()
		} else {
			format!("{prefix}.{key}")
		};

		match value {
			toml::Value::String(s) => {
				out.insert(path, s.clone());
			}
			toml::Value::Table(nested) => flatten(&path, nested, out),
			other => warn!(key = %path, kind = other.type_str(), "ignoring non-string catalog entry"),
		}
	}
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
	CATALOGS
		.get(&locale)
		.and_then(|messages| messages.get(key))
		.map(String::as_str)
}

/// Translate `key` into `locale`.
///
/// Falls back to the English message, then to the key itself.
pub fn t(locale: Locale, key: &str) -> String {
	if let Some(message) = lookup(locale, key) {
		return message.to_string();
	}

	if locale != Locale::En {
		if let Some(message) = lookup(Locale::En, key) {
			warn!(%locale, key, "missing translation, using English");
			return message.to_string();
		}
	}

	warn!(%locale, key, "unknown message key");
	key.to_string()
}

/// Translate `key` and substitute `{name}` placeholders.
///
/// ```
/// use mizan_common_i18n::{t_fmt, Locale};
///
/// let msg = t_fmt(Locale::En, "server.validation.required", &[("attribute", "email")]);
/// assert_eq!(msg, "The email field is required");
/// ```
pub fn t_fmt(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
	args
		.iter()
		.fold(t(locale, key), |message, (name, value)| {
			message.replace(&format!("{{{name}}}"), value)
		})
}
