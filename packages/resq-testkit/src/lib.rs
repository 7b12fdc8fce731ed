//! Shared fixtures for feed tests: a validated sample config and raw-row
//! builders. Mock providers stay inline in the tests that script them.

use resq_config::Config;
use resq_domain::{ImageRef, SpatialRow, TableRow};

/// A config that passes validation, pointing at nowhere in particular.
pub fn sample_config() -> Config {
	let cfg: Config = toml::from_str(
		r#"
		[service]
		log_level = "info"

		[backend]
		rest_url = "https://backend.test/rest/v1"
		api_key = "test-key"
		timeout_ms = 1000

		[geocode]
		api_base = "https://geo.test"
		path = "/reverse"
		timeout_ms = 1000
		"#,
	)
	.expect("Failed to parse the sample config.");

	resq_config::validate(&cfg).expect("Sample config failed validation.");

	cfg
}

pub fn table_row(id: &str, created_at: &str) -> TableRow {
	TableRow {
		id: id.to_string(),
		title: Some(format!("Listing {id}")),
		description: None,
		address: None,
		created_at: Some(created_at.to_string()),
		latitude: None,
		longitude: None,
		bounty: None,
		images: Vec::new(),
	}
}

pub fn table_row_at(
	id: &str,
	created_at: &str,
	latitude: f64,
	longitude: f64,
) -> TableRow {
	TableRow { latitude: Some(latitude), longitude: Some(longitude), ..table_row(id, created_at) }
}

pub fn with_image(mut row: TableRow, url: &str) -> TableRow {
	row.images.push(ImageRef { image_url: Some(url.to_string()) });

	row
}

pub fn spatial_row(id: &str, created_at: &str, distance_km: f64) -> SpatialRow {
	SpatialRow {
		id: id.to_string(),
		title: Some(format!("Listing {id}")),
		description: None,
		address: None,
		created_at: Some(created_at.to_string()),
		latitude: None,
		longitude: None,
		bounty: None,
		distance: Some(distance_km),
		image_url: None,
	}
}
