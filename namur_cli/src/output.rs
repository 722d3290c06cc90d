use anyhow::Result;
use namur_api::types::{ParkingSpot, ParkingType};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct SpotRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    spot_id: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    parking_type: String,
    #[tabled(rename = "Street")]
    #[serde(rename = "Street")]
    street: String,
    #[tabled(rename = "Coordinates")]
    #[serde(rename = "Coordinates")]
    coordinates: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
    #[tabled(rename = "Updated")]
    #[serde(rename = "Updated")]
    updated: String,
}

#[derive(Tabled, Serialize)]
struct TypeRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    slug: String,
    #[tabled(rename = "Label")]
    #[serde(rename = "Label")]
    label: String,
}

// -- Row builders --

fn build_spot_rows(spots: &[ParkingSpot]) -> Vec<SpotRow> {
    spots
        .iter()
        .map(|s| SpotRow {
            spot_id: s.spot_id.clone(),
            parking_type: s.parking_type.clone(),
            street: if s.street.is_empty() {
                "-".to_string()
            } else {
                s.street.clone()
            },
            coordinates: format_coordinates(s.latitude, s.longitude),
            created: s.created_at.format("%Y-%m-%d").to_string(),
            updated: s.updated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        })
        .collect()
}

fn build_type_rows(types: &[ParkingType]) -> Vec<TypeRow> {
    types
        .iter()
        .map(|t| TypeRow {
            code: t.code(),
            slug: t.slug().to_string(),
            label: t.label().to_string(),
        })
        .collect()
}

// -- Table output --

pub fn print_spots_table(spots: &[ParkingSpot]) {
    println!("{}", Table::new(build_spot_rows(spots)));
}

pub fn print_types_table(types: &[ParkingType]) {
    println!("{}", Table::new(build_type_rows(types)));
}

// -- Markdown output --

pub fn print_spots_markdown(spots: &[ParkingSpot]) {
    let mut table = Table::new(build_spot_rows(spots));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_types_markdown(types: &[ParkingType]) {
    let mut table = Table::new(build_type_rows(types));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_spots_csv(spots: &[ParkingSpot]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_spot_rows(spots) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_types_csv(types: &[ParkingType]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_type_rows(types) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{:.5}, {:.5}", latitude, longitude)
}
