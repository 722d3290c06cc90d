use anyhow::Result;
use namur_api::types::ParkingType;

use crate::output::{
    print_json, print_types_csv, print_types_markdown, print_types_table, OutputFormat,
};

pub fn run(format: &OutputFormat) -> Result<()> {
    let types = ParkingType::ALL;
    match format {
        OutputFormat::Table => print_types_table(&types),
        OutputFormat::Json => print_json(&types),
        OutputFormat::Csv => print_types_csv(&types)?,
        OutputFormat::Markdown => print_types_markdown(&types),
    }
    Ok(())
}
