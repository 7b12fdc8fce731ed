use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use resq_config::Geocode;
use resq_domain::Coordinate;

use crate::{Error, Result};

/// Best-effort place label for a coordinate. Callers degrade to
/// [`coordinate_label`] when this fails.
pub async fn reverse_geocode(cfg: &Geocode, coord: Coordinate) -> Result<String> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let res = client
		.get(url)
		.query(&[("latitude", coord.latitude), ("longitude", coord.longitude)])
		.send()
		.await?;
	let status = res.status();

	if !status.is_success() {
		let message = res.text().await.unwrap_or_default();

		return Err(Error::Status { status: status.as_u16(), message });
	}

	let json: Value = res.json().await?;

	parse_place_label(&json).ok_or_else(|| Error::InvalidResponse {
		message: "Geocode response carries no usable address fields.".to_string(),
	})
}

/// The "lat, lon" fallback shown when reverse geocoding is unavailable.
pub fn coordinate_label(coord: Coordinate) -> String {
	format!("{:.4}, {:.4}", coord.latitude, coord.longitude)
}

fn parse_place_label(json: &Value) -> Option<String> {
	let Some(address) = json.get("address") else {
		return json.get("display_name").and_then(Value::as_str).map(str::to_string);
	};
	let city = first_str(address, &["city", "town", "county"]);
	let district = first_str(address, &["district", "borough", "suburb"]);
	let road = first_str(address, &["road", "street"]);
	let parts: Vec<&str> = [city, district, road].into_iter().flatten().collect();

	if parts.is_empty() {
		return json.get("display_name").and_then(Value::as_str).map(str::to_string);
	}

	Some(parts.join(" "))
}

fn first_str<'a>(address: &'a Value, keys: &[&str]) -> Option<&'a str> {
	keys.iter().find_map(|key| address.get(key).and_then(Value::as_str))
}
