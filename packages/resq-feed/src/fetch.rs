use resq_domain::{
	Coordinate, ListingKind, ListingRecord, RawListing, SortKey, normalize_page, rank,
};
use resq_providers::ListingQuery;

use crate::{Error, FeedService, Result, RetryPolicy};

#[derive(Clone, Debug)]
pub struct PageRequest {
	pub kind: ListingKind,
	pub page_offset: u32,
	pub sort: SortKey,
	pub origin: Option<Coordinate>,
	pub search: Option<String>,
}

#[derive(Clone, Debug)]
pub struct FeedPage {
	pub records: Vec<ListingRecord>,
	/// True when the raw page was shorter than the configured page size.
	pub exhausted: bool,
}

impl FeedService {
	/// Fetches, normalizes and ranks one page.
	///
	/// The spatial path falls back to the generic table query on any error.
	/// Only rate-limited failures are retried, after a fixed delay and within
	/// the configured attempt budget; everything else surfaces immediately.
	pub async fn fetch_page(&self, req: &PageRequest) -> Result<FeedPage> {
		let policy = RetryPolicy::from_config(&self.cfg.retry);
		let mut attempt = 0;

		loop {
			attempt += 1;

			match self.fetch_page_once(req).await {
				Ok(page) => return Ok(page),
				Err(Error::RateLimited { message }) => {
					let Some(delay) = policy.next_delay(attempt) else {
						return Err(Error::RateLimited { message });
					};

					tracing::warn!(
						attempt,
						delay_ms = delay.as_millis() as u64,
						"Rate limited; retrying after the configured delay."
					);

					tokio::time::sleep(delay).await;
				},
				Err(err) => return Err(err),
			}
		}
	}

	async fn fetch_page_once(&self, req: &PageRequest) -> Result<FeedPage> {
		let query = ListingQuery {
			page_offset: req.page_offset,
			page_size: self.cfg.feed.page_size,
			search: req.search.clone(),
		};
		let rows = self.fetch_raw(req, &query).await?;
		let exhausted = (rows.len() as u32) < self.cfg.feed.page_size;
		let mut records = normalize_page(&rows, req.kind, req.origin);

		rank(&mut records, req.sort, req.origin);

		Ok(FeedPage { records, exhausted })
	}

	async fn fetch_raw(&self, req: &PageRequest, query: &ListingQuery) -> Result<Vec<RawListing>> {
		if req.sort == SortKey::Distance
			&& let Some(origin) = req.origin
		{
			match self
				.providers
				.listings
				.spatial_page(&self.cfg.backend, req.kind, origin, query)
				.await
			{
				Ok(rows) => return Ok(rows.into_iter().map(RawListing::Spatial).collect()),
				Err(err) => {
					tracing::warn!(
						error = %err,
						kind = ?req.kind,
						"Spatial query failed; falling back to the table query."
					);
				},
			}
		}

		match self.providers.listings.table_page(&self.cfg.backend, req.kind, query).await {
			Ok(rows) => Ok(rows.into_iter().map(RawListing::Table).collect()),
			Err(err) if err.is_rate_limited() =>
				Err(Error::RateLimited { message: err.to_string() }),
			Err(err) => Err(Error::Fetch { message: err.to_string() }),
		}
	}
}
