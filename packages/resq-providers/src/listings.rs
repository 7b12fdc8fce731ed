use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;

use resq_config::Backend;
use resq_domain::{Coordinate, ListingKind, SpatialRow, TableRow};

use crate::{Error, Result, auth_headers};

/// One pagination window over a listing table, zero-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingQuery {
	pub page_offset: u32,
	pub page_size: u32,
	pub search: Option<String>,
}
impl ListingQuery {
	pub fn range_start(&self) -> u32 {
		self.page_offset * self.page_size
	}

	fn normalized_search(&self) -> Option<&str> {
		self.search.as_deref().map(str::trim).filter(|search| !search.is_empty())
	}
}

/// Generic table query: newest first, nested image relation selected along
/// with the row, optional substring filter on title and address.
pub async fn fetch_table_page(
	cfg: &Backend,
	kind: ListingKind,
	query: &ListingQuery,
) -> Result<Vec<TableRow>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}/{}", cfg.rest_url, kind.table());
	let select = format!("*,{}(image_url)", kind.image_relation());
	let mut request = client
		.get(url)
		.headers(auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.query(&[("select", select.as_str()), ("order", "created_at.desc")])
		.query(&[("offset", query.range_start()), ("limit", query.page_size)]);

	if let Some(filter) = search_filter(query) {
		request = request.query(&[("or", filter.as_str())]);
	}

	let res = request.send().await?;

	decode_rows(res).await
}

/// Spatial RPC: the server computes distance from the origin and, for
/// radius-bounded kinds, pre-filters to the radius.
pub async fn fetch_spatial_page(
	cfg: &Backend,
	kind: ListingKind,
	origin: Coordinate,
	query: &ListingQuery,
) -> Result<Vec<SpatialRow>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}/rpc/{}", cfg.rest_url, kind.spatial_function());
	let res = client
		.post(url)
		.headers(auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.query(&[("offset", query.range_start()), ("limit", query.page_size)])
		.json(&spatial_params(kind, origin))
		.send()
		.await?;

	decode_rows(res).await
}

fn search_filter(query: &ListingQuery) -> Option<String> {
	let search = query.normalized_search()?;

	Some(format!("(title.ilike.*{search}*,address.ilike.*{search}*)"))
}

fn spatial_params(kind: ListingKind, origin: Coordinate) -> Value {
	let mut params = serde_json::json!({
		"user_latitude": origin.latitude,
		"user_longitude": origin.longitude,
	});

	if let Some(radius) = kind.max_distance_meters()
		&& let Some(map) = params.as_object_mut()
	{
		map.insert("radius_meters".to_string(), radius.into());
	}

	params
}

async fn decode_rows<T>(res: Response) -> Result<Vec<T>>
where
	T: serde::de::DeserializeOwned,
{
	let status = res.status();

	if !status.is_success() {
		let message = res.text().await.unwrap_or_default();

		return Err(Error::Status { status: status.as_u16(), message });
	}

	Ok(res.json().await?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn spatial_params_carry_a_radius_only_for_reports() {
		let origin = Coordinate { latitude: 37.5665, longitude: 126.978 };

		let report = spatial_params(ListingKind::Report, origin);
		assert_eq!(report["radius_meters"], 5_000.0);
		assert_eq!(report["user_latitude"], 37.5665);

		let rescue = spatial_params(ListingKind::Rescue, origin);
		assert!(rescue.get("radius_meters").is_none());
	}

	#[test]
	fn search_filter_matches_title_and_address() {
		let query = ListingQuery {
			page_offset: 0,
			page_size: 10,
			search: Some(" beagle ".to_string()),
		};

		assert_eq!(
			search_filter(&query).expect("Missing filter."),
			"(title.ilike.*beagle*,address.ilike.*beagle*)"
		);
		assert_eq!(
			search_filter(&ListingQuery {
				page_offset: 0,
				page_size: 10,
				search: Some("  ".to_string())
			}),
			None
		);
	}

	#[test]
	fn range_start_scales_with_the_page_offset() {
		let query = ListingQuery { page_offset: 3, page_size: 10, search: None };

		assert_eq!(query.range_start(), 30);
	}
}
