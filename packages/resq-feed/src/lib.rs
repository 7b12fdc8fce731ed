pub mod address_cache;
mod error;
pub mod fetch;
pub mod retry;
pub mod session;

use std::{future::Future, pin::Pin, sync::Arc};

pub use address_cache::AddressCache;
pub use error::{Error, Result};
pub use fetch::{FeedPage, PageRequest};
pub use retry::RetryPolicy;
pub use session::{FeedParams, FeedSession};

use resq_config::{Backend, Config, Geocode};
use resq_domain::{Coordinate, ListingKind, SpatialRow, TableRow};
use resq_providers::{ListingQuery, geocode, listings};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait ListingSource
where
	Self: Send + Sync,
{
	fn table_page<'a>(
		&'a self,
		cfg: &'a Backend,
		kind: ListingKind,
		query: &'a ListingQuery,
	) -> BoxFuture<'a, resq_providers::Result<Vec<TableRow>>>;

	fn spatial_page<'a>(
		&'a self,
		cfg: &'a Backend,
		kind: ListingKind,
		origin: Coordinate,
		query: &'a ListingQuery,
	) -> BoxFuture<'a, resq_providers::Result<Vec<SpatialRow>>>;
}

pub trait Geocoder
where
	Self: Send + Sync,
{
	fn reverse<'a>(&'a self, cfg: &'a Geocode, coord: Coordinate) -> BoxFuture<'a, Result<String>>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PermissionStatus {
	Granted,
	Denied,
}

/// Device location service. Denial is a degradation, not a failure: the feed
/// continues with no origin coordinate.
pub trait LocationSource
where
	Self: Send + Sync,
{
	fn request_permission(&self) -> BoxFuture<'_, PermissionStatus>;
	fn current_position(&self) -> BoxFuture<'_, Result<Coordinate>>;
}

struct DefaultProviders;

impl ListingSource for DefaultProviders {
	fn table_page<'a>(
		&'a self,
		cfg: &'a Backend,
		kind: ListingKind,
		query: &'a ListingQuery,
	) -> BoxFuture<'a, resq_providers::Result<Vec<TableRow>>> {
		Box::pin(listings::fetch_table_page(cfg, kind, query))
	}

	fn spatial_page<'a>(
		&'a self,
		cfg: &'a Backend,
		kind: ListingKind,
		origin: Coordinate,
		query: &'a ListingQuery,
	) -> BoxFuture<'a, resq_providers::Result<Vec<SpatialRow>>> {
		Box::pin(listings::fetch_spatial_page(cfg, kind, origin, query))
	}
}

impl Geocoder for DefaultProviders {
	fn reverse<'a>(&'a self, cfg: &'a Geocode, coord: Coordinate) -> BoxFuture<'a, Result<String>> {
		Box::pin(async move {
			geocode::reverse_geocode(cfg, coord)
				.await
				.map_err(|err| Error::Geocode { message: err.to_string() })
		})
	}
}

#[derive(Clone)]
pub struct Providers {
	pub listings: Arc<dyn ListingSource>,
	pub geocoder: Arc<dyn Geocoder>,
}
impl Providers {
	pub fn new(listings: Arc<dyn ListingSource>, geocoder: Arc<dyn Geocoder>) -> Self {
		Self { listings, geocoder }
	}
}
impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { listings: provider.clone(), geocoder: provider }
	}
}

pub struct FeedService {
	pub cfg: Config,
	pub providers: Providers,
}
impl FeedService {
	pub fn new(cfg: Config) -> Self {
		Self { cfg, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> Self {
		Self { cfg, providers }
	}
}

/// Resolves the device origin, degrading to `None` on denial or failure so
/// distance-dependent behavior can fall back to recency ordering.
pub async fn resolve_origin(location: &dyn LocationSource) -> Option<Coordinate> {
	if location.request_permission().await == PermissionStatus::Denied {
		tracing::info!("Location permission denied; the feed degrades to recency ordering.");

		return None;
	}

	match location.current_position().await {
		Ok(origin) => Some(origin),
		Err(err) => {
			tracing::warn!(error = %err, "Failed to read the current position.");

			None
		},
	}
}
