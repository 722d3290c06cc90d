mod commands;
mod output;

use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use namur_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "namur")]
#[command(about = "Query parking spots from the Open Data Platform of Namur")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "10.0", global = true)]
    timeout: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List parking spots of one type
    Parking(commands::parking::ParkingArgs),
    /// List the available parking types and their codes
    Types,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("namur=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = Client::new().with_timeout(parse_timeout(cli.timeout)?);

    match &cli.command {
        Commands::Parking(args) => commands::parking::run(args, &client, &format).await?,
        Commands::Types => commands::types::run(&format)?,
    }

    Ok(())
}

fn parse_timeout(secs: f64) -> Result<Duration> {
    if !secs.is_finite() || secs <= 0.0 {
        bail!("--timeout must be a positive number of seconds");
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| anyhow!("--timeout {} is out of range: {}", secs, e))
}
