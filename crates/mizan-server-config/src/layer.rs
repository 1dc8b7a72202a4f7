// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use serde::Deserialize;

use crate::sections::{HttpConfigLayer, LocaleConfigLayer, LoggingConfigLayer};

/// Server configuration layer. Every section is optional so sources only
/// need to provide what they know about.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub locale: Option<LocaleConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge `other` on top of `self`; values set in `other` win.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_section(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_section(&mut self.locale, other.locale, LocaleConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	let Some(incoming) = other else {
		return;
	};
	match base {
		Some(existing) => merge(existing, incoming),
		None => *base = Some(incoming),
	}
}
