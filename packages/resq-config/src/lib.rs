mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Backend, Config, Feed, Geocode, Retry, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.backend.rest_url.trim().is_empty() {
		return Err(Error::Validation {
			message: "backend.rest_url must be non-empty.".to_string(),
		});
	}
	if cfg.backend.api_key.trim().is_empty() {
		return Err(Error::Validation { message: "backend.api_key must be non-empty.".to_string() });
	}
	if cfg.backend.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "backend.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.feed.page_size == 0 {
		return Err(Error::Validation {
			message: "feed.page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.retry.max_attempts == 0 {
		return Err(Error::Validation {
			message: "retry.max_attempts must be greater than zero.".to_string(),
		});
	}
	if cfg.retry.delay_ms == 0 {
		return Err(Error::Validation {
			message: "retry.delay_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.geocode.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "geocode.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.geocode.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "geocode.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.geocode.precision_decimals > 8 {
		return Err(Error::Validation {
			message: "geocode.precision_decimals must be 8 or less.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	while cfg.backend.rest_url.ends_with('/') {
		cfg.backend.rest_url.pop();
	}
	while cfg.geocode.api_base.ends_with('/') {
		cfg.geocode.api_base.pop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Config {
		toml::from_str(
			r#"
			[service]
			log_level = "info"

			[backend]
			rest_url = "https://backend.resq.pet/rest/v1/"
			api_key = "anon-key"
			timeout_ms = 8000

			[geocode]
			api_base = "https://geo.resq.pet"
			path = "/reverse"
			timeout_ms = 4000
			"#,
		)
		.expect("Failed to parse sample config.")
	}

	#[test]
	fn defaults_fill_optional_sections() {
		let cfg = sample();

		assert_eq!(cfg.feed.page_size, 10);
		assert_eq!(cfg.retry.max_attempts, 3);
		assert_eq!(cfg.retry.delay_ms, 5_000);
		assert_eq!(cfg.geocode.precision_decimals, 4);
	}

	#[test]
	fn normalize_strips_trailing_slashes() {
		let mut cfg = sample();

		normalize(&mut cfg);

		assert_eq!(cfg.backend.rest_url, "https://backend.resq.pet/rest/v1");
	}

	#[test]
	fn validate_rejects_a_zero_page_size() {
		let mut cfg = sample();
		cfg.feed.page_size = 0;

		let err = validate(&cfg).expect_err("Validation should fail.");

		assert!(err.to_string().contains("feed.page_size"));
	}

	#[test]
	fn validate_rejects_an_empty_api_key() {
		let mut cfg = sample();
		cfg.backend.api_key = "  ".to_string();

		assert!(validate(&cfg).is_err());
	}
}
