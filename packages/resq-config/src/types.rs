use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub backend: Backend,
	#[serde(default)]
	pub feed: Feed,
	#[serde(default)]
	pub retry: Retry,
	pub geocode: Geocode,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Backend {
	/// Base URL of the backend's REST interface, without a trailing slash.
	pub rest_url: String,
	pub api_key: String,
	pub timeout_ms: u64,
	/// Extra headers forwarded verbatim on every request.
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Feed {
	pub page_size: u32,
}
impl Default for Feed {
	fn default() -> Self {
		Self { page_size: 10 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Retry {
	pub max_attempts: u32,
	pub delay_ms: u64,
}
impl Default for Retry {
	fn default() -> Self {
		Self { max_attempts: 3, delay_ms: 5_000 }
	}
}

#[derive(Debug, Deserialize)]
pub struct Geocode {
	pub api_base: String,
	pub path: String,
	pub timeout_ms: u64,
	/// Decimal places used when rounding coordinates into address-cache keys.
	#[serde(default = "default_precision_decimals")]
	pub precision_decimals: u32,
}

fn default_precision_decimals() -> u32 {
	4
}
