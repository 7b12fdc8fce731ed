use serde_json::json;

use resq_domain::{Coordinate, ListingKind, RawListing, SortKey, normalize_page, rank};

fn table(value: serde_json::Value) -> RawListing {
	RawListing::Table(serde_json::from_value(value).expect("Failed to build table row."))
}

fn spatial(value: serde_json::Value) -> RawListing {
	RawListing::Spatial(serde_json::from_value(value).expect("Failed to build spatial row."))
}

#[test]
fn mixed_page_normalizes_dedups_and_ranks_by_distance() {
	let origin = Coordinate { latitude: 37.5665, longitude: 126.978 };
	let rows = vec![
		spatial(json!({
			"id": "s1",
			"title": "Injured cat near the river",
			"created_at": "2025-06-03T09:00:00Z",
			"distance": 2.4,
			"image_url": "https://cdn.resq.pet/s1.jpg",
		})),
		table(json!({
			"id": "t1",
			"title": "Puppy found at city hall",
			"created_at": "2025-06-01T09:00:00Z",
			"latitude": 37.5665,
			"longitude": 126.978,
		})),
		// Duplicate of s1 from the fallback path; dropped.
		table(json!({
			"id": "s1",
			"title": "Injured cat (duplicate)",
			"created_at": "2025-06-03T09:00:00Z",
		})),
	];
	let mut records = normalize_page(&rows, ListingKind::Report, Some(origin));

	rank(&mut records, SortKey::Distance, Some(origin));

	let ids: Vec<_> = records.iter().map(|record| record.id.as_str()).collect();
	assert_eq!(ids, vec!["t1", "s1"]);
	assert_eq!(records[1].title, "Injured cat near the river");
	assert_eq!(records[1].distance_meters, Some(2_400.0));
}

#[test]
fn distance_request_without_origin_never_fails_and_orders_by_recency() {
	let rows = vec![
		table(json!({ "id": "old", "created_at": "2025-06-01T09:00:00Z" })),
		table(json!({ "id": "new", "created_at": "2025-06-05T09:00:00Z" })),
		table(json!({ "id": "mid", "created_at": "2025-06-03T09:00:00Z" })),
	];
	let mut records = normalize_page(&rows, ListingKind::Report, None);

	rank(&mut records, SortKey::Distance, None);

	let ids: Vec<_> = records.iter().map(|record| record.id.as_str()).collect();
	assert_eq!(ids, vec!["new", "mid", "old"]);
	assert!(records.iter().all(|record| record.distance_meters.is_none()));
}

#[test]
fn bounty_survives_normalization_for_rescues() {
	let rows = vec![spatial(json!({
		"id": "rescue-1",
		"title": "Dog stuck on a ledge",
		"created_at": "2025-06-02T10:00:00Z",
		"distance": 12.0,
		"bounty": 50_000.0,
	}))];
	let records = normalize_page(&rows, ListingKind::Rescue, None);

	assert_eq!(records[0].bounty, Some(50_000.0));
}
