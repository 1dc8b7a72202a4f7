// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Response payloads for case records.
//!
//! Records come from the persistence layer with both language columns
//! populated (or not); resources pick the display value for the request
//! locale while still exposing the raw columns for editing views.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use mizan_common_i18n::{t, Bilingual, BilingualField, Locale};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
	Pending,
	InProgress,
	Resolved,
	Closed,
}

impl CaseStatus {
	pub const fn as_str(self) -> &'static str {
		match self {
			CaseStatus::Pending => "pending",
			CaseStatus::InProgress => "in_progress",
			CaseStatus::Resolved => "resolved",
			CaseStatus::Closed => "closed",
		}
	}

	/// Human-readable status in `locale`.
	pub fn label(self, locale: Locale) -> String {
		t(locale, &format!("server.status.{}", self.as_str()))
	}
}

impl fmt::Display for CaseStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A status string outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case status '{0}'")]
pub struct UnknownCaseStatus(pub String);

impl FromStr for CaseStatus {
	type Err = UnknownCaseStatus;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"pending" => Ok(CaseStatus::Pending),
			"in_progress" => Ok(CaseStatus::InProgress),
			"resolved" => Ok(CaseStatus::Resolved),
			"closed" => Ok(CaseStatus::Closed),
			other => Err(UnknownCaseStatus(other.to_string())),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasePriority {
	Low,
	#[default]
	Normal,
	High,
	Urgent,
}

/// A legal service offered by the firm.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceRecord {
	pub id: i64,
	pub name_en: Option<String>,
	pub name_ar: Option<String>,
}

impl Bilingual for ServiceRecord {
	const FIELDS: &'static [BilingualField<Self>] = &[BilingualField {
		name: "name",
		en: |s| s.name_en.as_deref(),
		ar: |s| s.name_ar.as_deref(),
	}];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRecord {
	pub id: i64,
	pub name: String,
	pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawyerRecord {
	pub id: i64,
	pub name: String,
	pub email: String,
	pub specialization: Option<String>,
}

/// A client's case as stored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaseRecord {
	pub id: i64,
	pub reference_number: String,
	pub title_en: Option<String>,
	pub title_ar: Option<String>,
	pub description: String,
	pub status: CaseStatus,
	pub priority: Option<CasePriority>,
	pub service: Option<ServiceRecord>,
	pub client: PartyRecord,
	pub lawyer: Option<LawyerRecord>,
	pub created_at: Option<DateTime<Utc>>,
	pub updated_at: Option<DateTime<Utc>>,
}

impl Bilingual for CaseRecord {
	const FIELDS: &'static [BilingualField<Self>] = &[BilingualField {
		name: "title",
		en: |c| c.title_en.as_deref(),
		ar: |c| c.title_ar.as_deref(),
	}];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSummary<'a> {
	pub id: i64,
	pub name: Option<&'a str>,
}

/// A case rendered for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResource<'a> {
	pub id: i64,
	pub reference_number: &'a str,
	/// Display title in the request locale, with fallback.
	pub title: Option<&'a str>,
	pub title_en: Option<&'a str>,
	pub title_ar: Option<&'a str>,
	pub description: &'a str,
	pub status: CaseStatus,
	pub status_label: String,
	pub priority: CasePriority,
	pub service: Option<ServiceSummary<'a>>,
	pub client: &'a PartyRecord,
	pub lawyer: Option<&'a LawyerRecord>,
	pub created_at: Option<String>,
	pub updated_at: Option<String>,
}

impl<'a> CaseResource<'a> {
	pub fn from_record(record: &'a CaseRecord, locale: Locale) -> Self {
		let titles = record.bilingual_all("title");

		Self {
			id: record.id,
			reference_number: &record.reference_number,
			title: titles.get(locale),
			title_en: titles.en,
			title_ar: titles.ar,
			description: &record.description,
			status: record.status,
			status_label: record.status.label(locale),
			priority: record.priority.unwrap_or_default(),
			service: record.service.as_ref().map(|s| ServiceSummary {
				id: s.id,
				name: s.bilingual("name", locale),
			}),
			client: &record.client,
			lawyer: record.lawyer.as_ref(),
			created_at: record.created_at.map(rfc3339),
			updated_at: record.updated_at.map(rfc3339),
		}
	}

	pub fn collection(records: &'a [CaseRecord], locale: Locale) -> Vec<Self> {
		records
			.iter()
			.map(|r| Self::from_record(r, locale))
			.collect()
	}
}

/// Wraps a payload with the locale it was rendered in.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceEnvelope<T> {
	pub data: T,
	pub locale: Locale,
	pub timestamp: String,
}

impl<T> ResourceEnvelope<T> {
	pub fn new(data: T, locale: Locale) -> Self {
		Self {
			data,
			locale,
			timestamp: rfc3339(Utc::now()),
		}
	}
}

pub(crate) fn rfc3339(at: DateTime<Utc>) -> String {
	at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
