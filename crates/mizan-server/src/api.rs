// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Router assembly and shared application state.

use std::sync::Arc;

use axum::{
	middleware::from_fn_with_state,
	routing::{get, post},
	Router,
};
use mizan_common_i18n::t;
use mizan_server_config::{LocaleConfig, ServerConfig};

use crate::{error::ServerError, i18n::locale_middleware, i18n::RequestLocale, routes};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
	pub locale: Arc<LocaleConfig>,
}

pub fn create_app_state(config: &ServerConfig) -> AppState {
	AppState {
		locale: Arc::new(config.locale.clone()),
	}
}

/// Build the application router.
///
/// Every route, including the fallbacks, runs behind the locale middleware.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/locale", get(routes::locale::list_locales))
		.route("/api/locale/{locale}", post(routes::locale::set_locale))
		.fallback(not_found)
		.method_not_allowed_fallback(method_not_allowed)
		.layer(from_fn_with_state(state.locale.clone(), locale_middleware))
		.with_state(state)
}

async fn not_found(RequestLocale(locale): RequestLocale) -> ServerError {
	ServerError::NotFound(t(locale, "server.errors.not_found"))
}

async fn method_not_allowed(RequestLocale(locale): RequestLocale) -> ServerError {
	ServerError::MethodNotAllowed(t(locale, "server.errors.method_not_allowed"))
}
