use crate::Coordinate;

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points, via the haversine formula.
pub fn haversine_meters(a: Coordinate, b: Coordinate) -> f64 {
	let phi1 = a.latitude.to_radians();
	let phi2 = b.latitude.to_radians();
	let delta_phi = (b.latitude - a.latitude).to_radians();
	let delta_lambda = (b.longitude - a.longitude).to_radians();
	let h = (delta_phi / 2.0).sin().powi(2)
		+ phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
	let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

	EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_distance_between_identical_points() {
		let point = Coordinate { latitude: 37.5665, longitude: 126.978 };

		assert_eq!(haversine_meters(point, point), 0.0);
	}

	#[test]
	fn seoul_city_hall_to_bucheon_reference_distance() {
		let city_hall = Coordinate { latitude: 37.5665, longitude: 126.978 };
		let bucheon = Coordinate { latitude: 37.4989, longitude: 126.7833 };
		let meters = haversine_meters(city_hall, bucheon);

		assert!((18_560.0..=18_930.0).contains(&meters), "unexpected distance: {meters}");
	}

	#[test]
	fn symmetric_in_its_arguments() {
		let a = Coordinate { latitude: 35.1796, longitude: 129.0756 };
		let b = Coordinate { latitude: 37.5665, longitude: 126.978 };

		assert!((haversine_meters(a, b) - haversine_meters(b, a)).abs() < 1e-6);
	}
}
