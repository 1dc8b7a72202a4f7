// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Mizan.
//!
//! Mizan serves every response in exactly one of two languages, English
//! (`en`) or Arabic (`ar`). This crate owns the pieces every other crate
//! needs to agree on:
//!
//! - [`Locale`]: the closed set of supported languages.
//! - [`resolve`]: per-request locale negotiation from the `Accept-Language`
//!   header, the locale cookie and the locale query parameter.
//! - [`Bilingual`]: field-level fallback between `*_en` / `*_ar` columns.
//! - [`t`] / [`t_fmt`]: server-side message catalogs.
//!
//! # String Naming Convention
//!
//! Catalog keys use hierarchical dot notation with a `server.` prefix,
//! e.g. `server.cases.created`.
//!
//! # Example
//!
//! ```
//! use mizan_common_i18n::{is_rtl, resolve, t, Locale, LocaleSignals};
//!
//! let signals = LocaleSignals::new().with_accept_language("en-US,en;q=0.9");
//! let locale = resolve(&signals, Locale::Ar);
//! assert_eq!(locale, Locale::En);
//!
//! let message = t(locale, "server.cases.created");
//! assert_eq!(message, "Case created successfully");
//!
//! if is_rtl("ar") {
//!     // Add dir="rtl" to HTML
//! }
//! ```

mod bilingual;
mod catalog;
mod error;
mod locale;
mod resolve;

pub use bilingual::{Bilingual, BilingualField, BilingualPair};
pub use catalog::{t, t_fmt};
pub use error::UnsupportedLocale;
pub use locale::{
	available_locales, is_rtl, is_supported, locale_info, Direction, Locale, LocaleInfo,
};
pub use resolve::{parse_accept_language, resolve, LocaleSignals};

pub use locale::{DEFAULT_LOCALE, LOCALES};
