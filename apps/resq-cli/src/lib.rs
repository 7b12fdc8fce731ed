use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use resq_domain::{Coordinate, ListingKind, SortKey};
use resq_feed::{
	BoxFuture, Error, FeedParams, FeedService, FeedSession, LocationSource, PermissionStatus,
	Result, resolve_origin,
};

#[derive(Debug, Parser)]
#[command(version, rename_all = "kebab")]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[arg(long, value_enum, default_value_t = KindArg::Report)]
	pub kind: KindArg,
	#[arg(long, value_enum, default_value_t = SortArg::Recency)]
	pub sort: SortArg,
	/// Number of pages to fetch before exiting.
	#[arg(long, default_value_t = 1)]
	pub pages: u32,
	#[arg(long)]
	pub search: Option<String>,
	/// Fixed origin standing in for the device location service.
	#[arg(long, requires = "lon")]
	pub lat: Option<f64>,
	#[arg(long, requires = "lat")]
	pub lon: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
	Report,
	Rescue,
}
impl From<KindArg> for ListingKind {
	fn from(kind: KindArg) -> Self {
		match kind {
			KindArg::Report => Self::Report,
			KindArg::Rescue => Self::Rescue,
		}
	}
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortArg {
	Recency,
	Distance,
}
impl From<SortArg> for SortKey {
	fn from(sort: SortArg) -> Self {
		match sort {
			SortArg::Recency => Self::Recency,
			SortArg::Distance => Self::Distance,
		}
	}
}

/// Command-line stand-in for the device location service: granted when a
/// fixed origin was supplied, denied otherwise.
struct FixedLocation {
	origin: Option<Coordinate>,
}
impl LocationSource for FixedLocation {
	fn request_permission(&self) -> BoxFuture<'_, PermissionStatus> {
		let status = if self.origin.is_some() {
			PermissionStatus::Granted
		} else {
			PermissionStatus::Denied
		};

		Box::pin(async move { status })
	}

	fn current_position(&self) -> BoxFuture<'_, Result<Coordinate>> {
		let origin = self.origin;

		Box::pin(async move { origin.ok_or(Error::LocationPermissionDenied) })
	}
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let cfg = resq_config::load(&args.config)?;

	init_tracing(&cfg);

	let location = FixedLocation {
		origin: match (args.lat, args.lon) {
			(Some(latitude), Some(longitude)) => Some(Coordinate { latitude, longitude }),
			_ => None,
		},
	};
	let origin = resolve_origin(&location).await;
	let service = FeedService::new(cfg);
	let params = FeedParams {
		kind: args.kind.into(),
		sort: args.sort.into(),
		origin,
		search: args.search.clone(),
	};
	let mut session = FeedSession::new(params.clone());

	for _ in 0..args.pages {
		if session.exhausted() {
			break;
		}

		let page = service.fetch_page(&session.next_request()).await?;

		session.apply(&params, page);
	}

	tracing::info!(records = session.records().len(), "Feed fetched.");

	for record in session.records() {
		println!("{}", serde_json::to_string(record)?);
	}

	Ok(())
}

fn init_tracing(cfg: &resq_config::Config) {
	let filter =
		EnvFilter::try_new(&cfg.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
