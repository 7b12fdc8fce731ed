use crate::{Coordinate, ListingRecord, SortKey};

/// Distance ordering is meaningless without an origin; degrade to recency.
pub fn effective_sort(sort: SortKey, origin: Option<Coordinate>) -> SortKey {
	if sort == SortKey::Distance && origin.is_none() { SortKey::Recency } else { sort }
}

/// Stable in-place sort. A record with no distance sorts last; timestamps were
/// already defaulted to the epoch by the normalizer, so this never fails and
/// never drops a record.
pub fn rank(records: &mut [ListingRecord], sort: SortKey, origin: Option<Coordinate>) {
	match effective_sort(sort, origin) {
		SortKey::Distance => records.sort_by(|a, b| {
			let a = a.distance_meters.unwrap_or(f64::INFINITY);
			let b = b.distance_meters.unwrap_or(f64::INFINITY);

			a.total_cmp(&b)
		}),
		SortKey::Recency => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
	}
}
