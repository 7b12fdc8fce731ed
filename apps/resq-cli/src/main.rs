use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = resq_cli::Args::parse();

	resq_cli::run(args).await
}
