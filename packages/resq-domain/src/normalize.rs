use std::collections::HashSet;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
	Coordinate, ListingKind, ListingRecord, MISSING_ADDRESS, MISSING_DESCRIPTION, RawListing,
	SpatialRow, TableRow, geo,
};

/// Reduces one raw page to unique `ListingRecord`s, in input order.
///
/// The first occurrence of an `id` wins; later duplicates are skipped. When an
/// origin is known, rows beyond the kind's radius cap are dropped. Total over
/// well-formed input: a row never fails to normalize.
pub fn normalize_page(
	rows: &[RawListing],
	kind: ListingKind,
	origin: Option<Coordinate>,
) -> Vec<ListingRecord> {
	let mut seen = HashSet::new();
	let mut out = Vec::with_capacity(rows.len());

	for row in rows {
		if !seen.insert(row.id().to_string()) {
			continue;
		}

		let record = match row {
			RawListing::Table(row) => from_table(row, origin),
			RawListing::Spatial(row) => from_spatial(row, origin),
		};

		if origin.is_some()
			&& let (Some(distance), Some(max)) =
				(record.distance_meters, kind.max_distance_meters())
			&& distance > max
		{
			continue;
		}

		out.push(record);
	}

	out
}

struct CommonFields<'a> {
	id: &'a str,
	title: Option<&'a str>,
	description: Option<&'a str>,
	address: Option<&'a str>,
	created_at: Option<&'a str>,
	bounty: Option<f64>,
}

fn from_table(row: &TableRow, origin: Option<Coordinate>) -> ListingRecord {
	let image_url = row.images.iter().find_map(|image| image.image_url.clone());
	let distance_meters = match (origin, row.latitude, row.longitude) {
		(Some(origin), Some(latitude), Some(longitude)) =>
			Some(geo::haversine_meters(origin, Coordinate { latitude, longitude })),
		_ => None,
	};

	build(common_fields(row), distance_meters, image_url)
}

fn from_spatial(row: &SpatialRow, origin: Option<Coordinate>) -> ListingRecord {
	// The RPC reports kilometers; everything downstream works in meters.
	let distance_meters = match (row.distance, origin, row.latitude, row.longitude) {
		(Some(kilometers), ..) => Some(kilometers * 1_000.0),
		(None, Some(origin), Some(latitude), Some(longitude)) =>
			Some(geo::haversine_meters(origin, Coordinate { latitude, longitude })),
		_ => None,
	};
	let fields = CommonFields {
		id: &row.id,
		title: row.title.as_deref(),
		description: row.description.as_deref(),
		address: row.address.as_deref(),
		created_at: row.created_at.as_deref(),
		bounty: row.bounty,
	};

	build(fields, distance_meters, row.image_url.clone())
}

fn common_fields(row: &TableRow) -> CommonFields<'_> {
	CommonFields {
		id: &row.id,
		title: row.title.as_deref(),
		description: row.description.as_deref(),
		address: row.address.as_deref(),
		created_at: row.created_at.as_deref(),
		bounty: row.bounty,
	}
}

fn build(
	fields: CommonFields<'_>,
	distance_meters: Option<f64>,
	image_url: Option<String>,
) -> ListingRecord {
	ListingRecord {
		id: fields.id.to_string(),
		title: fields.title.unwrap_or_default().to_string(),
		description: non_empty(fields.description).unwrap_or(MISSING_DESCRIPTION).to_string(),
		address: non_empty(fields.address).unwrap_or(MISSING_ADDRESS).to_string(),
		created_at: parse_created_at(fields.id, fields.created_at),
		distance_meters: distance_meters.map(|meters| meters.max(0.0)),
		image_url,
		bounty: fields.bounty,
	}
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|value| !value.trim().is_empty())
}

fn parse_created_at(id: &str, raw: Option<&str>) -> OffsetDateTime {
	let Some(raw) = raw else {
		tracing::warn!(id = %id, "Listing row missing created_at; sorting it last.");

		return OffsetDateTime::UNIX_EPOCH;
	};

	match OffsetDateTime::parse(raw, &Rfc3339) {
		Ok(created_at) => created_at,
		Err(err) => {
			tracing::warn!(id = %id, error = %err, "Listing row has an unparseable created_at.");

			OffsetDateTime::UNIX_EPOCH
		},
	}
}
