use std::collections::HashSet;

use resq_domain::{Coordinate, ListingKind, ListingRecord, SortKey, rank};

use crate::fetch::{FeedPage, PageRequest};

/// The key a fetch is issued under. Any change discards accumulated state.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedParams {
	pub kind: ListingKind,
	pub sort: SortKey,
	pub origin: Option<Coordinate>,
	pub search: Option<String>,
}

/// Screen-lifetime accumulation of pages.
///
/// Pages are requested in strictly increasing offset order. There is no
/// in-flight cancellation; a response fetched under superseded params is
/// discarded when applied. After every append the full accumulated list is
/// re-ranked, so the feed stays globally ordered even when a later page
/// contains a record closer than one already shown.
#[derive(Debug)]
pub struct FeedSession {
	params: FeedParams,
	records: Vec<ListingRecord>,
	seen: HashSet<String>,
	next_offset: u32,
	exhausted: bool,
}
impl FeedSession {
	pub fn new(params: FeedParams) -> Self {
		Self { params, records: Vec::new(), seen: HashSet::new(), next_offset: 0, exhausted: false }
	}

	pub fn params(&self) -> &FeedParams {
		&self.params
	}

	pub fn records(&self) -> &[ListingRecord] {
		&self.records
	}

	pub fn exhausted(&self) -> bool {
		self.exhausted
	}

	pub fn next_request(&self) -> PageRequest {
		PageRequest {
			kind: self.params.kind,
			page_offset: self.next_offset,
			sort: self.params.sort,
			origin: self.params.origin,
			search: self.params.search.clone(),
		}
	}

	/// Appends a fetched page, dropping ids already accumulated. Returns
	/// false when the page was fetched under different params and discarded.
	pub fn apply(&mut self, params: &FeedParams, page: FeedPage) -> bool {
		if *params != self.params {
			tracing::debug!("Discarding a page fetched under superseded feed params.");

			return false;
		}

		for record in page.records {
			if !self.seen.insert(record.id.clone()) {
				continue;
			}

			self.records.push(record);
		}

		rank(&mut self.records, self.params.sort, self.params.origin);

		self.next_offset += 1;
		self.exhausted = page.exhausted;

		true
	}

	/// Discards everything and rebuilds under new params.
	pub fn rekey(&mut self, params: FeedParams) {
		*self = Self::new(params);
	}
}
