pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
	#[error(transparent)]
	InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),
	#[error(transparent)]
	InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
	#[error("{message}")]
	InvalidHeader { message: String },
	#[error("Backend returned status {status}: {message}")]
	Status { status: u16, message: String },
	#[error("{message}")]
	InvalidResponse { message: String },
}
impl Error {
	/// Rate limits arrive either as HTTP 429 or as a message signature
	/// injected by the backend's proxy layer.
	pub fn is_rate_limited(&self) -> bool {
		match self {
			Self::Status { status: 429, .. } => true,
			Self::Status { message, .. } => {
				let message = message.to_ascii_lowercase();

				message.contains("rate limit") || message.contains("too many requests")
			},
			_ => false,
		}
	}
}
