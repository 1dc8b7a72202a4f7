// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for Mizan server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`MIZAN_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use mizan_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub locale: LocaleConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`MIZAN_SERVER_*`)
/// 2. Config file (`/etc/mizan/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![Box::new(EnvSource)])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let locale = layer.locale.unwrap_or_default().finalize()?;
	let logging = layer.logging.unwrap_or_default().finalize();

	info!(
		host = %http.host,
		port = http.port,
		default_locale = %locale.default_locale,
		locale_cookie = %locale.cookie_name,
		log_json = logging.json,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		locale,
		logging,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use mizan_common_i18n::Locale;
	use proptest::prelude::*;

	#[test]
	fn test_finalize_empty_layer_gives_defaults() {
		let config = finalize(ServerConfigLayer::default()).unwrap();
		assert_eq!(config, ServerConfig::default());
		assert_eq!(config.socket_addr(), "0.0.0.0:8080");
	}

	#[test]
	fn test_finalize_rejects_bad_locale() {
		let layer = ServerConfigLayer {
			locale: Some(LocaleConfigLayer {
				default_locale: Some("xx".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		assert!(finalize(layer).is_err());
	}

	#[test]
	fn test_file_layer_overrides_defaults() {
		use std::io::Write;

		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[locale]\ndefault_locale = \"en\"\n[logging]\nlevel = \"debug\"").unwrap();

		let config = load_from_sources(vec![
			Box::new(TomlSource::new(file.path())),
			Box::new(DefaultsSource),
		])
		.unwrap();
		assert_eq!(config.locale.default_locale, Locale::En);
		assert_eq!(config.logging.level, "debug");
		assert_eq!(config.http, HttpConfig::default());
	}

	proptest! {
		#[test]
		fn socket_addr_joins_host_and_port(port in any::<u16>()) {
			let config = ServerConfig {
				http: HttpConfig { host: "127.0.0.1".to_string(), port },
				..Default::default()
			};
			prop_assert_eq!(config.socket_addr(), format!("127.0.0.1:{port}"));
		}
	}
}
