// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bilingual attributes stored as one column per language.
//!
//! Records such as cases and services keep each translatable attribute in
//! two columns (`title_en`, `title_ar`). Each record type declares those
//! pairs once, in a static table, by implementing [`Bilingual`]:
//!
//! ```
//! use mizan_common_i18n::{Bilingual, BilingualField, Locale};
//!
//! struct Service {
//!     name_en: Option<String>,
//!     name_ar: Option<String>,
//! }
//!
//! impl Bilingual for Service {
//!     const FIELDS: &'static [BilingualField<Self>] = &[BilingualField {
//!         name: "name",
//!         en: |s| s.name_en.as_deref(),
//!         ar: |s| s.name_ar.as_deref(),
//!     }];
//! }
//!
//! let service = Service {
//!     name_en: Some("Contract Review".to_string()),
//!     name_ar: None,
//! };
//! assert_eq!(service.bilingual("name", Locale::Ar), Some("Contract Review"));
//! assert_eq!(service.bilingual_all("name").ar, None);
//! ```

use serde::Serialize;

use crate::locale::Locale;

/// Both language variants of one attribute, without any fallback applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BilingualPair<'a> {
	pub en: Option<&'a str>,
	pub ar: Option<&'a str>,
}

impl<'a> BilingualPair<'a> {
	pub fn new(en: Option<&'a str>, ar: Option<&'a str>) -> Self {
		Self { en, ar }
	}

	/// The stored value for exactly `locale`, empty or not.
	pub fn raw(&self, locale: Locale) -> Option<&'a str> {
		match locale {
			Locale::En => self.en,
			Locale::Ar => self.ar,
		}
	}

	/// The display value for `locale`.
	///
	/// Tries the active locale, then English, then Arabic. Empty strings
	/// count as missing. Returns `None` when neither language has a value.
	pub fn get(&self, locale: Locale) -> Option<&'a str> {
		let non_empty = |l: Locale| self.raw(l).filter(|v| !v.is_empty());

		non_empty(locale)
			.or_else(|| (locale != Locale::En).then(|| non_empty(Locale::En)).flatten())
			.or_else(|| (locale != Locale::Ar).then(|| non_empty(Locale::Ar)).flatten())
	}
}

/// Static description of one bilingual attribute on `T`.
pub struct BilingualField<T> {
	/// Logical attribute name, e.g. `"title"`.
	pub name: &'static str,
	pub en: fn(&T) -> Option<&str>,
	pub ar: fn(&T) -> Option<&str>,
}

impl<T> BilingualField<T> {
	pub fn pair<'a>(&self, entity: &'a T) -> BilingualPair<'a> {
		BilingualPair::new((self.en)(entity), (self.ar)(entity))
	}
}

/// A record type with one or more bilingual attributes.
pub trait Bilingual: Sized + 'static {
	/// Every bilingual attribute of the type.
	const FIELDS: &'static [BilingualField<Self>];

	fn bilingual_field(name: &str) -> Option<&'static BilingualField<Self>> {
		Self::FIELDS.iter().find(|f| f.name == name)
	}

	/// Display value of `attribute` for `locale`, with fallback.
	///
	/// Unknown attribute names yield `None`.
	fn bilingual(&self, attribute: &str, locale: Locale) -> Option<&str> {
		self.bilingual_all(attribute).get(locale)
	}

	/// Both stored variants of `attribute`, regardless of locale.
	fn bilingual_all(&self, attribute: &str) -> BilingualPair<'_> {
		match Self::bilingual_field(attribute) {
			Some(field) => field.pair(self),
			None => {
				tracing::debug!(attribute, "unknown bilingual attribute");
				BilingualPair::default()
			}
		}
	}
}
