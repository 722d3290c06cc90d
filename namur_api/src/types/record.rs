//! Raw shapes of the `search/` response, as sent by the API.

use serde::{Deserialize, Serialize};

/// Envelope of a `search/` response. Only the records are kept.
#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    pub records: Vec<RawRecord>,
}

/// One element of the `records` array.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawRecord {
    pub fields: RawFields,

    pub geometry: Option<Geometry>,

    pub record_timestamp: Option<String>,
}

/// Dataset columns of a record. Every column is optional on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawFields {
    pub identifiant: Option<String>,

    pub type_parking: Option<String>,

    pub rue_nom: Option<String>,

    pub date_creation: Option<String>,
}

/// GeoJSON point: `[longitude, latitude]`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}
