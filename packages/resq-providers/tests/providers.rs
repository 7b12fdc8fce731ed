use reqwest::header::AUTHORIZATION;
use serde_json::Map;

use resq_providers::Error;

#[test]
fn builds_apikey_and_bearer_auth_headers() {
	let headers =
		resq_providers::auth_headers("anon-key", &Map::new()).expect("Failed to build headers.");

	assert_eq!(headers.get("apikey").expect("Missing apikey header."), "anon-key");
	assert_eq!(
		headers.get(AUTHORIZATION).expect("Missing authorization header."),
		"Bearer anon-key"
	);
}

#[test]
fn forwards_default_headers() {
	let mut defaults = Map::new();
	defaults.insert("x-client-info".to_string(), "resq-feed/0.1".into());

	let headers =
		resq_providers::auth_headers("anon-key", &defaults).expect("Failed to build headers.");

	assert_eq!(headers.get("x-client-info").expect("Missing default header."), "resq-feed/0.1");
}

#[test]
fn rejects_non_string_default_headers() {
	let mut defaults = Map::new();
	defaults.insert("x-attempt".to_string(), 3.into());

	assert!(resq_providers::auth_headers("anon-key", &defaults).is_err());
}

#[test]
fn rate_limit_signature_detection() {
	let by_status = Error::Status { status: 429, message: String::new() };
	let by_message = Error::Status { status: 503, message: "Rate limit exceeded".to_string() };
	let plain = Error::Status { status: 500, message: "internal error".to_string() };

	assert!(by_status.is_rate_limited());
	assert!(by_message.is_rate_limited());
	assert!(!plain.is_rate_limited());
}
