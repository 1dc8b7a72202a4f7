// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! End-to-end locale negotiation through the router.

use std::sync::Arc;

use axum::{
	body::Body,
	http::{header, HeaderValue, Method, Request, StatusCode},
	middleware::from_fn_with_state,
	response::Response,
	routing::get,
	Json, Router,
};
use mizan_common_i18n::Locale;
use mizan_server::{
	create_app_state, create_router,
	i18n::locale_middleware,
	resources::{CaseRecord, CaseResource, CaseStatus, PartyRecord, ResourceEnvelope},
	RequestLocale, ServerConfig,
};
use mizan_server_config::LocaleConfig;
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
	create_router(create_app_state(&ServerConfig::default()))
}

async fn send(router: Router, request: Request<Body>) -> Response {
	router.oneshot(request).await.unwrap()
}

fn get_request(path: &str, headers: &[(&str, &str)]) -> Request<Body> {
	let mut builder = Request::builder().method(Method::GET).uri(path);
	for (name, value) in headers {
		builder = builder.header(*name, *value);
	}
	builder.body(Body::empty()).unwrap()
}

async fn json_body(response: Response) -> Value {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

fn set_cookie(response: &Response) -> Option<String> {
	response
		.headers()
		.get(header::SET_COOKIE)
		.and_then(|v| v.to_str().ok())
		.map(str::to_string)
}

async fn current_locale(headers: &[(&str, &str)], path: &str) -> String {
	let response = send(app(), get_request(path, headers)).await;
	assert_eq!(response.status(), StatusCode::OK);
	json_body(response).await["current_locale"]
		.as_str()
		.unwrap()
		.to_string()
}

#[tokio::test]
async fn health_reports_version() {
	let response = send(app(), get_request("/health", &[])).await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = json_body(response).await;
	assert_eq!(body["status"], "healthy");
	assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
	assert!(body["timestamp"].as_str().is_some_and(|t| t.ends_with('Z')));
}

#[tokio::test]
async fn default_locale_without_signals() {
	assert_eq!(current_locale(&[], "/api/locale").await, "ar");
}

#[tokio::test]
async fn header_wins_over_cookie_and_query() {
	let locale = current_locale(
		&[("accept-language", "en-US,en;q=0.9"), ("cookie", "locale=ar")],
		"/api/locale?locale=ar",
	)
	.await;
	assert_eq!(locale, "en");
}

#[tokio::test]
async fn unsupported_header_falls_through_to_cookie() {
	let locale = current_locale(
		&[("accept-language", "fr-FR,de"), ("cookie", "locale=en")],
		"/api/locale",
	)
	.await;
	assert_eq!(locale, "en");
}

#[tokio::test]
async fn later_supported_header_entry_is_used() {
	let locale = current_locale(&[("accept-language", "fr-FR, ar-EG;q=0.8")], "/api/locale").await;
	assert_eq!(locale, "ar");
}

fn raw_header_request(path: &str, name: &'static str, value: &str) -> Request<Body> {
	Request::builder()
		.method(Method::GET)
		.uri(path)
		.header(name, HeaderValue::from_bytes(value.as_bytes()).unwrap())
		.body(Body::empty())
		.unwrap()
}

#[tokio::test]
async fn non_ascii_header_entry_does_not_hide_supported_one() {
	let request = raw_header_request("/api/locale", "accept-language", "en, العربية");
	let body = json_body(send(app(), request).await).await;
	assert_eq!(body["current_locale"], "en");
}

#[tokio::test]
async fn non_ascii_sibling_cookie_does_not_hide_locale_cookie() {
	let request = raw_header_request("/api/locale", "cookie", "name=عمر; locale=en");
	let body = json_body(send(app(), request).await).await;
	assert_eq!(body["current_locale"], "en");
}

#[tokio::test]
async fn repeated_accept_language_lines_are_one_list() {
	let request = Request::builder()
		.method(Method::GET)
		.uri("/api/locale")
		.header("accept-language", "fr-FR")
		.header("accept-language", "en;q=0.8")
		.body(Body::empty())
		.unwrap();
	let body = json_body(send(app(), request).await).await;
	assert_eq!(body["current_locale"], "en");
}

#[tokio::test]
async fn cookie_wins_over_query() {
	let locale = current_locale(&[("cookie", "theme=dark; locale=en")], "/api/locale?locale=ar").await;
	assert_eq!(locale, "en");
}

#[tokio::test]
async fn query_used_when_no_header_or_cookie() {
	assert_eq!(current_locale(&[], "/api/locale?locale=en").await, "en");
}

#[tokio::test]
async fn cookie_value_must_match_exactly() {
	let locale = current_locale(&[("cookie", "locale=en-US")], "/api/locale").await;
	assert_eq!(locale, "ar");
}

#[tokio::test]
async fn resolved_locale_is_persisted_in_cookie() {
	let response = send(app(), get_request("/api/locale?locale=en", &[])).await;
	assert_eq!(
		set_cookie(&response).as_deref(),
		Some("locale=en; Path=/; Max-Age=31536000; SameSite=Lax")
	);
}

#[tokio::test]
async fn locale_listing_includes_direction() {
	let body = json_body(send(app(), get_request("/api/locale", &[])).await).await;
	let locales = body["supported_locales"].as_array().unwrap();
	assert_eq!(locales.len(), 2);
	assert_eq!(locales[0]["code"], "en");
	assert_eq!(locales[0]["direction"], "ltr");
	assert_eq!(locales[1]["code"], "ar");
	assert_eq!(locales[1]["name_native"], "العربية");
	assert_eq!(locales[1]["direction"], "rtl");
}

#[tokio::test]
async fn set_locale_cookie_carries_resolved_locale() {
	let request = Request::builder()
		.method(Method::POST)
		.uri("/api/locale/en")
		.header("accept-language", "ar")
		.body(Body::empty())
		.unwrap();
	let response = send(app(), request).await;

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		set_cookie(&response).as_deref(),
		Some("locale=ar; Path=/; Max-Age=31536000; SameSite=Lax")
	);

	let body = json_body(response).await;
	assert_eq!(body["locale"], "en");
	assert_eq!(body["message"], "Locale updated successfully");
}

#[tokio::test]
async fn set_locale_rejects_unsupported_code() {
	let request = Request::builder()
		.method(Method::POST)
		.uri("/api/locale/fr")
		.body(Body::empty())
		.unwrap();
	let response = send(app(), request).await;

	assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
	let body = json_body(response).await;
	assert_eq!(body["message"], "لغة غير صالحة");
	assert_eq!(body["supported_locales"], serde_json::json!(["en", "ar"]));
}

#[tokio::test]
async fn not_found_is_localized() {
	let response = send(app(), get_request("/api/nope", &[("accept-language", "en")])).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	let body = json_body(response).await;
	assert_eq!(body["error"], "not_found");
	assert_eq!(body["message"], "Resource not found");

	let response = send(app(), get_request("/api/nope", &[])).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert!(set_cookie(&response).is_some());
	let body = json_body(response).await;
	assert_eq!(body["message"], "الموارد المطلوبة غير موجودة");
}

#[tokio::test]
async fn method_not_allowed_is_localized() {
	let response = send(app(), get_request("/api/locale/en", &[("cookie", "locale=en")])).await;
	assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
	let body = json_body(response).await;
	assert_eq!(body["error"], "method_not_allowed");
	assert_eq!(body["message"], "Method not allowed");
}

#[tokio::test]
async fn configured_default_and_cookie_name_are_honored() {
	let mut config = ServerConfig::default();
	config.locale.default_locale = Locale::En;
	config.locale.cookie_name = "lang".to_string();
	config.locale.cookie_max_age_secs = 60;
	let router = create_router(create_app_state(&config));

	let response = send(router.clone(), get_request("/api/locale", &[("cookie", "locale=ar")])).await;
	assert_eq!(
		set_cookie(&response).as_deref(),
		Some("lang=en; Path=/; Max-Age=60; SameSite=Lax")
	);
	assert_eq!(json_body(response).await["current_locale"], "en");

	let response = send(router, get_request("/api/locale", &[("cookie", "lang=ar")])).await;
	assert_eq!(json_body(response).await["current_locale"], "ar");
}

fn case_record() -> CaseRecord {
	CaseRecord {
		id: 1,
		reference_number: "CS-1".to_string(),
		title_en: Some("Lease dispute".to_string()),
		title_ar: None,
		description: "Tenant claim".to_string(),
		status: CaseStatus::Pending,
		priority: None,
		service: None,
		client: PartyRecord {
			id: 2,
			name: "Omar".to_string(),
			email: "omar@example.com".to_string(),
		},
		lawyer: None,
		created_at: None,
		updated_at: None,
	}
}

async fn show_case(RequestLocale(locale): RequestLocale) -> Json<Value> {
	let record = case_record();
	let envelope = ResourceEnvelope::new(CaseResource::from_record(&record, locale), locale);
	Json(serde_json::to_value(envelope).unwrap())
}

fn case_router() -> Router {
	Router::new()
		.route("/cases/1", get(show_case))
		.layer(from_fn_with_state(
			Arc::new(LocaleConfig::default()),
			locale_middleware,
		))
}

#[tokio::test]
async fn handler_renders_record_in_request_locale() {
	let body = json_body(send(case_router(), get_request("/cases/1", &[])).await).await;
	assert_eq!(body["locale"], "ar");
	assert_eq!(body["data"]["title"], "Lease dispute");
	assert_eq!(body["data"]["title_ar"], Value::Null);
	assert_eq!(body["data"]["status_label"], "قيد الانتظار");

	let body = json_body(
		send(
			case_router(),
			get_request("/cases/1", &[("accept-language", "en")]),
		)
		.await,
	)
	.await;
	assert_eq!(body["locale"], "en");
	assert_eq!(body["data"]["status_label"], "Pending");
}
