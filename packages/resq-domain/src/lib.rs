pub mod geo;
pub mod listing;
pub mod normalize;
pub mod rank;

pub use listing::{
	Coordinate, ImageRef, ListingKind, ListingRecord, MISSING_ADDRESS, MISSING_DESCRIPTION,
	RawListing, SortKey, SpatialRow, TableRow,
};
pub use normalize::normalize_page;
pub use rank::{effective_sort, rank};
