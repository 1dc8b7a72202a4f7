// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales and their metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedLocale;

/// A supported interface language.
///
/// The set is closed: no other locale is valid anywhere in Mizan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	Ar,
}

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Ltr,
	Rtl,
}

impl Direction {
	pub const fn as_str(self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// Display metadata for a locale, as served by the locale discovery endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
	pub code: &'static str,
	pub name: &'static str,
	pub name_native: &'static str,
	pub direction: Direction,
}

/// Locale used when a request carries no usable language signal.
pub const DEFAULT_LOCALE: Locale = Locale::Ar;

/// All supported locales, in display order.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		name_native: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		name_native: "العربية",
		direction: Direction::Rtl,
	},
];

impl Locale {
	pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

	/// Two-letter code, e.g. `"ar"`.
	pub const fn code(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Ar => "ar",
		}
	}

	/// Exact, case-sensitive lookup of a locale code.
	pub fn from_code(code: &str) -> Option<Self> {
		match code {
			"en" => Some(Locale::En),
			"ar" => Some(Locale::Ar),
			_ => None,
		}
	}

	pub const fn direction(self) -> Direction {
		match self {
			Locale::En => Direction::Ltr,
			Locale::Ar => Direction::Rtl,
		}
	}

	pub fn info(self) -> &'static LocaleInfo {
		match self {
			Locale::En => &LOCALES[0],
			Locale::Ar => &LOCALES[1],
		}
	}
}

impl Default for Locale {
	fn default() -> Self {
		DEFAULT_LOCALE
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Locale {
	type Err = UnsupportedLocale;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Locale::from_code(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
	}
}

/// Returns true if `code` is a supported locale code.
pub fn is_supported(code: &str) -> bool {
	Locale::from_code(code).is_some()
}

/// Returns true if `code` is a supported right-to-left locale.
pub fn is_rtl(code: &str) -> bool {
	Locale::from_code(code).is_some_and(|l| l.direction() == Direction::Rtl)
}

pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	Locale::from_code(code).map(Locale::info)
}

pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}
