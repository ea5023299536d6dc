use anyhow::Result;
use clap::Parser;
use weather_pins::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_pins::run(cli).await
}
