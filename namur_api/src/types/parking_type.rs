//! Parking categories used by the `namur-parking-emplacements` dataset.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Type of a parking spot, as labelled by the dataset.
///
/// Each variant carries a fixed integer code (1-13) and the French label the
/// API expects in `refine.type_parking`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParkingType {
    /// Regular parking spot.
    #[default]
    #[serde(rename = "Place normale")]
    Normal = 1,

    /// Spot in front of a driveway or garage entrance.
    #[serde(rename = "Devant accès/garage")]
    Garage = 2,

    /// Reduced-mobility (disabled) spot.
    #[serde(rename = "PMR")]
    Pmr = 3,

    /// Short stop for dropping off passengers.
    #[serde(rename = "Dépose-minute")]
    DropOff = 4,

    /// Delivery bay.
    #[serde(rename = "Livraison")]
    Delivery = 5,

    #[serde(rename = "Police")]
    Police = 6,

    #[serde(rename = "Taxi")]
    Taxi = 7,

    #[serde(rename = "Car-sharing")]
    CarSharing = 8,

    /// Spot reserved for recycling collection.
    #[serde(rename = "Recyclage")]
    Recycling = 9,

    /// Coach parking.
    #[serde(rename = "Car")]
    Car = 10,

    #[serde(rename = "Bus scolaire")]
    SchoolBus = 11,

    /// Electric vehicle charging point.
    #[serde(rename = "Borne électrique")]
    ElectricCar = 12,

    #[serde(rename = "Réservé")]
    Reserved = 13,
}

impl ParkingType {
    /// All parking types, ordered by code.
    pub const ALL: [ParkingType; 13] = [
        ParkingType::Normal,
        ParkingType::Garage,
        ParkingType::Pmr,
        ParkingType::DropOff,
        ParkingType::Delivery,
        ParkingType::Police,
        ParkingType::Taxi,
        ParkingType::CarSharing,
        ParkingType::Recycling,
        ParkingType::Car,
        ParkingType::SchoolBus,
        ParkingType::ElectricCar,
        ParkingType::Reserved,
    ];

    /// Label sent to the API in `refine.type_parking`.
    pub fn label(&self) -> &'static str {
        match self {
            ParkingType::Normal => "Place normale",
            ParkingType::Garage => "Devant accès/garage",
            ParkingType::Pmr => "PMR",
            ParkingType::DropOff => "Dépose-minute",
            ParkingType::Delivery => "Livraison",
            ParkingType::Police => "Police",
            ParkingType::Taxi => "Taxi",
            ParkingType::CarSharing => "Car-sharing",
            ParkingType::Recycling => "Recyclage",
            ParkingType::Car => "Car",
            ParkingType::SchoolBus => "Bus scolaire",
            ParkingType::ElectricCar => "Borne électrique",
            ParkingType::Reserved => "Réservé",
        }
    }

    /// Kebab-case name, handy on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            ParkingType::Normal => "normal",
            ParkingType::Garage => "garage",
            ParkingType::Pmr => "pmr",
            ParkingType::DropOff => "drop-off",
            ParkingType::Delivery => "delivery",
            ParkingType::Police => "police",
            ParkingType::Taxi => "taxi",
            ParkingType::CarSharing => "car-sharing",
            ParkingType::Recycling => "recycling",
            ParkingType::Car => "car",
            ParkingType::SchoolBus => "school-bus",
            ParkingType::ElectricCar => "electric-car",
            ParkingType::Reserved => "reserved",
        }
    }

    /// Numeric code of this type (1-13).
    pub fn code(&self) -> i64 {
        *self as i64
    }

    /// Resolves a numeric code to a parking type.
    ///
    /// Fails with [`Error::UnknownParkingType`] when `code` is outside `1..=13`.
    pub fn from_code(code: i64) -> Result<Self, Error> {
        ParkingType::ALL
            .iter()
            .copied()
            .find(|t| t.code() == code)
            .ok_or(Error::UnknownParkingType(code))
    }
}

impl std::fmt::Display for ParkingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accepts a numeric code, a slug (`pmr`, `drop-off`) or the API label.
impl FromStr for ParkingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return ParkingType::from_code(code);
        }
        ParkingType::ALL
            .iter()
            .copied()
            .find(|t| t.slug().eq_ignore_ascii_case(s) || t.label() == s)
            .ok_or_else(|| Error::UnknownParkingName(s.to_string()))
    }
}
