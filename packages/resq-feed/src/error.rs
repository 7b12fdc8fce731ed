pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Fetch failed: {message}")]
	Fetch { message: String },
	#[error("Rate limited by the backend: {message}")]
	RateLimited { message: String },
	#[error("Location permission denied.")]
	LocationPermissionDenied,
	#[error("Reverse geocoding failed: {message}")]
	Geocode { message: String },
}
