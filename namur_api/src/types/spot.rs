//! Parking spot model and the mapping from raw API records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;

use super::record::RawRecord;
use crate::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A single parking spot from the `namur-parking-emplacements` dataset.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ParkingSpot {
    /// Dataset identifier of the spot. Unique within one result set only.
    pub spot_id: String,

    /// Parking type label, e.g. "PMR".
    pub parking_type: String,

    /// Street name. Empty when the dataset has none.
    pub street: String,

    pub longitude: f64,

    pub latitude: f64,

    /// Creation date of the spot, at midnight UTC.
    pub created_at: DateTime<Utc>,

    /// Last server-side modification of the record.
    pub updated_at: DateTime<Utc>,
}

impl ParkingSpot {
    /// Builds a spot from one JSON element of the `records` array.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, Error> {
        let record: RawRecord = serde_json::from_value(value.clone())
            .map_err(|e| Error::MalformedRecord(e.to_string()))?;
        Self::from_record(record)
    }

    /// Builds a spot from an already deserialized record.
    ///
    /// Missing text columns become empty strings. Geometry and both dates are
    /// required.
    pub fn from_record(record: RawRecord) -> Result<Self, Error> {
        let fields = record.fields;
        let (longitude, latitude) = match record.geometry.as_ref().map(|g| g.coordinates.as_slice())
        {
            Some([lon, lat, ..]) => (*lon, *lat),
            _ => {
                return Err(Error::MalformedRecord(
                    "geometry must hold [longitude, latitude]".to_string(),
                ))
            }
        };

        let created_at = parse_date(fields.date_creation.as_deref())?;
        let updated_at = parse_timestamp(record.record_timestamp.as_deref())?;

        Ok(Self {
            spot_id: fields.identifiant.unwrap_or_default(),
            parking_type: fields.type_parking.unwrap_or_default(),
            street: fields.rue_nom.unwrap_or_default(),
            longitude,
            latitude,
            created_at,
            updated_at,
        })
    }
}

fn parse_date(raw: Option<&str>) -> Result<DateTime<Utc>, Error> {
    let raw = raw.ok_or_else(|| Error::MalformedRecord("missing date_creation".to_string()))?;
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| Error::MalformedRecord(format!("invalid date_creation {:?}: {}", raw, e)))?;
    Ok(date.and_time(NaiveTime::default()).and_utc())
}

fn parse_timestamp(raw: Option<&str>) -> Result<DateTime<Utc>, Error> {
    let raw =
        raw.ok_or_else(|| Error::MalformedRecord("missing record_timestamp".to_string()))?;
    let ts = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|e| {
        Error::MalformedRecord(format!("invalid record_timestamp {:?}: {}", raw, e))
    })?;
    Ok(ts.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "datasetid": "namur-parking-emplacements",
            "recordid": "abc",
            "fields": {
                "identifiant": "PMR-0042",
                "type_parking": "PMR",
                "rue_nom": "Rue de Fer",
                "date_creation": "2019-05-14"
            },
            "geometry": {"type": "Point", "coordinates": [4.8624, 50.4669]},
            "record_timestamp": "2023-01-09T10:21:33Z"
        })
    }

    #[test]
    fn maps_all_fields() {
        let spot = ParkingSpot::from_json(&sample()).unwrap();
        assert_eq!(spot.spot_id, "PMR-0042");
        assert_eq!(spot.parking_type, "PMR");
        assert_eq!(spot.street, "Rue de Fer");
        assert_eq!(spot.longitude, 4.8624);
        assert_eq!(spot.latitude, 50.4669);
        assert_eq!(
            (spot.created_at.year(), spot.created_at.month(), spot.created_at.day()),
            (2019, 5, 14)
        );
        assert_eq!(spot.created_at.hour(), 0);
        assert_eq!(spot.updated_at.to_rfc3339(), "2023-01-09T10:21:33+00:00");
    }

    #[test]
    fn missing_text_fields_become_empty() {
        let mut value = sample();
        value["fields"] = json!({"date_creation": "2019-05-14"});
        let spot = ParkingSpot::from_json(&value).unwrap();
        assert_eq!(spot.spot_id, "");
        assert_eq!(spot.parking_type, "");
        assert_eq!(spot.street, "");
    }

    #[test]
    fn short_geometry_is_malformed() {
        let mut value = sample();
        value["geometry"]["coordinates"] = json!([4.86]);
        let err = ParkingSpot::from_json(&value).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord(_)));

        value.as_object_mut().unwrap().remove("geometry");
        let err = ParkingSpot::from_json(&value).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord(_)));
    }

    #[test]
    fn bad_dates_are_malformed() {
        let mut value = sample();
        value["record_timestamp"] = json!("2023-01-09 10:21:33");
        assert!(matches!(
            ParkingSpot::from_json(&value).unwrap_err(),
            Error::MalformedRecord(_)
        ));

        let mut value = sample();
        value["fields"]["date_creation"] = json!("14/05/2019");
        assert!(matches!(
            ParkingSpot::from_json(&value).unwrap_err(),
            Error::MalformedRecord(_)
        ));
    }

    #[test]
    fn missing_fields_object_is_malformed() {
        let value = json!({"record_timestamp": "2023-01-09T10:21:33Z"});
        assert!(matches!(
            ParkingSpot::from_json(&value).unwrap_err(),
            Error::MalformedRecord(_)
        ));
    }
}
