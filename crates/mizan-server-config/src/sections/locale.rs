// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale negotiation configuration.

use mizan_common_i18n::{Locale, DEFAULT_LOCALE};
use serde::Deserialize;

use crate::error::ConfigError;

/// One year.
pub const DEFAULT_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Locale configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
	/// Locale used when a request carries no usable signal.
	pub default_locale: Locale,
	/// Name of the cookie read on the way in and written on the way out.
	pub cookie_name: String,
	/// Name of the query parameter that may select a locale.
	pub query_param: String,
	pub cookie_max_age_secs: u64,
}

impl Default for LocaleConfig {
	fn default() -> Self {
		Self {
			default_locale: DEFAULT_LOCALE,
			cookie_name: "locale".to_string(),
			query_param: "locale".to_string(),
			cookie_max_age_secs: DEFAULT_COOKIE_MAX_AGE_SECS,
		}
	}
}

/// Locale configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LocaleConfigLayer {
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub cookie_name: Option<String>,
	#[serde(default)]
	pub query_param: Option<String>,
	#[serde(default)]
	pub cookie_max_age_secs: Option<u64>,
}

impl LocaleConfigLayer {
	pub fn merge(&mut self, other: LocaleConfigLayer) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.cookie_name.is_some() {
			self.cookie_name = other.cookie_name;
		}
		if other.query_param.is_some() {
			self.query_param = other.query_param;
		}
		if other.cookie_max_age_secs.is_some() {
			self.cookie_max_age_secs = other.cookie_max_age_secs;
		}
	}

	pub fn finalize(self) -> Result<LocaleConfig, ConfigError> {
		let defaults = LocaleConfig::default();

		let default_locale = match self.default_locale {
			Some(code) => code.parse::<Locale>().map_err(|e| ConfigError::InvalidValue {
				key: "locale.default_locale".to_string(),
				message: e.to_string(),
			})?,
			None => defaults.default_locale,
		};

		let cookie_name = self.cookie_name.unwrap_or(defaults.cookie_name);
		if cookie_name.is_empty() || cookie_name.contains([';', '=', ',', ' ']) {
			return Err(ConfigError::InvalidValue {
				key: "locale.cookie_name".to_string(),
				message: format!("'{cookie_name}' is not a valid cookie name"),
			});
		}

		Ok(LocaleConfig {
			default_locale,
			cookie_name,
			query_param: self.query_param.unwrap_or(defaults.query_param),
			cookie_max_age_secs: self
				.cookie_max_age_secs
				.unwrap_or(defaults.cookie_max_age_secs),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = LocaleConfigLayer::default().finalize().unwrap();
		assert_eq!(config.default_locale, Locale::Ar);
		assert_eq!(config.cookie_name, "locale");
		assert_eq!(config.query_param, "locale");
		assert_eq!(config.cookie_max_age_secs, 31_536_000);
	}

	#[test]
	fn test_custom_default_locale() {
		let layer = LocaleConfigLayer {
			default_locale: Some("en".to_string()),
			..Default::default()
		};
		assert_eq!(layer.finalize().unwrap().default_locale, Locale::En);
	}

	#[test]
	fn test_unsupported_default_locale_rejected() {
		let layer = LocaleConfigLayer {
			default_locale: Some("fr".to_string()),
			..Default::default()
		};
		assert!(matches!(
			layer.finalize(),
			Err(ConfigError::InvalidValue { ref key, .. }) if key == "locale.default_locale"
		));
	}

	#[test]
	fn test_bad_cookie_name_rejected() {
		let layer = LocaleConfigLayer {
			cookie_name: Some("my locale".to_string()),
			..Default::default()
		};
		assert!(layer.finalize().is_err());
	}

	#[test]
	fn test_merge_overrides() {
		let mut base = LocaleConfigLayer {
			default_locale: Some("ar".to_string()),
			cookie_name: Some("lang".to_string()),
			..Default::default()
		};
		base.merge(LocaleConfigLayer {
			default_locale: Some("en".to_string()),
			..Default::default()
		});
		let config = base.finalize().unwrap();
		assert_eq!(config.default_locale, Locale::En);
		assert_eq!(config.cookie_name, "lang");
	}
}
