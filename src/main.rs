use clap::Parser;

use fixtures_cli::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    fixtures_cli::app::run(cli).await?;
    Ok(())
}
