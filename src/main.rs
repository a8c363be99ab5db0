use clap::Parser;
use flux_cli::{cli::Cli, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    flux_cli::run(cli).await?;

    Ok(())
}
