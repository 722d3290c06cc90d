use anyhow::Result;
use clap::Args;
use namur_api::types::ParkingType;
use namur_api::{Client, ParkingQuery, Query};

use crate::output::{
    print_json, print_spots_csv, print_spots_markdown, print_spots_table, OutputFormat,
};

#[derive(Args)]
pub struct ParkingArgs {
    /// Maximum number of spots to return
    #[arg(long, default_value = "10")]
    pub limit: u32,

    /// Parking type: code (1-13), name (pmr, taxi, drop-off, ...) or API label
    #[arg(long = "type", default_value = "normal")]
    pub parking_type: String,
}

pub async fn run(args: &ParkingArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let parking_type: ParkingType = args.parking_type.parse()?;
    let query = ParkingQuery::default()
        .with_limit(args.limit)
        .with_parking_type(parking_type);

    let spots = client.search(&query).await?;

    eprintln!("{} {} spots found", spots.len(), parking_type);

    match format {
        OutputFormat::Table => print_spots_table(&spots),
        OutputFormat::Json => print_json(&spots),
        OutputFormat::Csv => print_spots_csv(&spots)?,
        OutputFormat::Markdown => print_spots_markdown(&spots),
    }

    Ok(())
}
