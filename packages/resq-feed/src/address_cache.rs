use std::collections::HashMap;

use resq_domain::Coordinate;
use resq_providers::geocode;

use crate::FeedService;

/// Append-only place-label cache keyed by rounded coordinates. Owned by the
/// screen session and dropped with it; nothing here is process-global.
#[derive(Debug)]
pub struct AddressCache {
	precision_decimals: u32,
	entries: HashMap<(i64, i64), String>,
}
impl AddressCache {
	pub fn new(precision_decimals: u32) -> Self {
		Self { precision_decimals, entries: HashMap::new() }
	}

	pub fn get(&self, coord: Coordinate) -> Option<&str> {
		self.entries.get(&self.key(coord)).map(String::as_str)
	}

	pub fn insert(&mut self, coord: Coordinate, label: String) {
		self.entries.insert(self.key(coord), label);
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn key(&self, coord: Coordinate) -> (i64, i64) {
		let scale = 10_f64.powi(self.precision_decimals as i32);

		((coord.latitude * scale).round() as i64, (coord.longitude * scale).round() as i64)
	}
}

impl FeedService {
	/// Resolves a display label for a coordinate through the session cache,
	/// degrading to the "lat, lon" form when the geocoder fails. Whatever
	/// label results is cached, so a failing geocoder is asked only once per
	/// rounded coordinate.
	pub async fn resolve_address(&self, cache: &mut AddressCache, coord: Coordinate) -> String {
		if let Some(label) = cache.get(coord) {
			return label.to_string();
		}

		let label = match self.providers.geocoder.reverse(&self.cfg.geocode, coord).await {
			Ok(label) => label,
			Err(err) => {
				tracing::warn!(error = %err, "Reverse geocoding failed; using the coordinate label.");

				geocode::coordinate_label(coord)
			},
		};

		cache.insert(coord, label.clone());

		label
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn coordinates_within_rounding_precision_share_an_entry() {
		let mut cache = AddressCache::new(4);

		cache.insert(
			Coordinate { latitude: 37.56651, longitude: 126.97800 },
			"서울 중구".to_string(),
		);

		let nearby = Coordinate { latitude: 37.56649, longitude: 126.97801 };
		assert_eq!(cache.get(nearby), Some("서울 중구"));

		let elsewhere = Coordinate { latitude: 37.5, longitude: 126.9 };
		assert_eq!(cache.get(elsewhere), None);
		assert_eq!(cache.len(), 1);
	}

	#[test]
	fn higher_precision_separates_nearby_coordinates() {
		let mut cache = AddressCache::new(6);

		cache.insert(Coordinate { latitude: 37.56651, longitude: 126.978 }, "a".to_string());

		assert!(cache.get(Coordinate { latitude: 37.56652, longitude: 126.978 }).is_none());
		assert!(!cache.is_empty());
	}
}
