// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Mizan HTTP server.
//!
//! Serves the bilingual (English/Arabic) legal-services API. Every request is
//! assigned a locale by [`i18n::locale_middleware`]; handlers render
//! messages and bilingual records in that locale.

pub mod api;
pub mod error;
pub mod i18n;
pub mod resources;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServerError;
pub use i18n::RequestLocale;
pub use mizan_server_config::ServerConfig;
