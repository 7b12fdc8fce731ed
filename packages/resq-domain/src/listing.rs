use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Placeholder shown when a row carries no description.
pub const MISSING_DESCRIPTION: &str = "설명 없음";
/// Placeholder shown when a row carries no address.
pub const MISSING_ADDRESS: &str = "위치 정보 없음";

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
	Report,
	Rescue,
}
impl ListingKind {
	pub fn table(self) -> &'static str {
		match self {
			Self::Report => "reports",
			Self::Rescue => "rescues",
		}
	}

	pub fn image_relation(self) -> &'static str {
		match self {
			Self::Report => "reports_images",
			Self::Rescue => "rescues_images",
		}
	}

	pub fn spatial_function(self) -> &'static str {
		match self {
			Self::Report => "reports_within_radius",
			Self::Rescue => "rescues_within_radius",
		}
	}

	/// Radius cap applied when an origin coordinate is known. `None` means the
	/// kind is not radius-bounded.
	pub fn max_distance_meters(self) -> Option<f64> {
		match self {
			Self::Report => Some(5_000.0),
			Self::Rescue => None,
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coordinate {
	pub latitude: f64,
	pub longitude: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
	Recency,
	Distance,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ImageRef {
	#[serde(default)]
	pub image_url: Option<String>,
}

/// A row from the generic table query. Images arrive as a nested one-to-many
/// relation whose field name depends on the table.
#[derive(Clone, Debug, Deserialize)]
pub struct TableRow {
	pub id: String,
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub address: Option<String>,
	#[serde(default)]
	pub created_at: Option<String>,
	#[serde(default)]
	pub latitude: Option<f64>,
	#[serde(default)]
	pub longitude: Option<f64>,
	#[serde(default)]
	pub bounty: Option<f64>,
	#[serde(default, alias = "reports_images", alias = "rescues_images")]
	pub images: Vec<ImageRef>,
}

/// A row from the spatial RPC. The server computes `distance` (kilometers)
/// and flattens the first image into `image_url`.
#[derive(Clone, Debug, Deserialize)]
pub struct SpatialRow {
	pub id: String,
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub address: Option<String>,
	#[serde(default)]
	pub created_at: Option<String>,
	#[serde(default)]
	pub latitude: Option<f64>,
	#[serde(default)]
	pub longitude: Option<f64>,
	#[serde(default)]
	pub bounty: Option<f64>,
	#[serde(default)]
	pub distance: Option<f64>,
	#[serde(default)]
	pub image_url: Option<String>,
}

/// Raw row tagged with the query path that produced it, so the normalizer
/// matches variants instead of sniffing field presence.
#[derive(Clone, Debug)]
pub enum RawListing {
	Table(TableRow),
	Spatial(SpatialRow),
}
impl RawListing {
	pub fn id(&self) -> &str {
		match self {
			Self::Table(row) => &row.id,
			Self::Spatial(row) => &row.id,
		}
	}
}

/// Unified view-model record. Immutable once constructed; a re-keyed fetch
/// rebuilds the accumulated list instead of patching records in place.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListingRecord {
	pub id: String,
	pub title: String,
	pub description: String,
	pub address: String,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	pub distance_meters: Option<f64>,
	pub image_url: Option<String>,
	pub bounty: Option<f64>,
}
