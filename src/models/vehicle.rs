//! Vehicle and city models.
//!
//! This module defines the [`Vehicle`] struct, the closed [`VehicleType`]
//! enumeration and the [`City`] a ruleset belongs to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaxError;

/// The kind of vehicle passing a toll station.
///
/// Each variant carries a stable numeric code used by external callers
/// that identify vehicles by number rather than by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Motorcycle (code 1).
    Motorcycle,
    /// Tractor (code 2).
    Tractor,
    /// Emergency vehicle (code 3).
    Emergency,
    /// Diplomat vehicle (code 4).
    Diplomat,
    /// Foreign-registered vehicle (code 5).
    Foreign,
    /// Military vehicle (code 6).
    Military,
    /// Bus (code 7).
    Bus,
    /// Private car (code 8).
    Car,
    /// Anything else (code 9).
    Other,
}

impl VehicleType {
    /// All vehicle types in code order.
    pub const ALL: [VehicleType; 9] = [
        VehicleType::Motorcycle,
        VehicleType::Tractor,
        VehicleType::Emergency,
        VehicleType::Diplomat,
        VehicleType::Foreign,
        VehicleType::Military,
        VehicleType::Bus,
        VehicleType::Car,
        VehicleType::Other,
    ];

    /// Returns the numeric code of the vehicle type.
    ///
    /// ```
    /// use congestion_tax::models::VehicleType;
    ///
    /// assert_eq!(VehicleType::Motorcycle.code(), 1);
    /// assert_eq!(VehicleType::Car.code(), 8);
    /// ```
    pub fn code(self) -> u8 {
        match self {
            VehicleType::Motorcycle => 1,
            VehicleType::Tractor => 2,
            VehicleType::Emergency => 3,
            VehicleType::Diplomat => 4,
            VehicleType::Foreign => 5,
            VehicleType::Military => 6,
            VehicleType::Bus => 7,
            VehicleType::Car => 8,
            VehicleType::Other => 9,
        }
    }

    /// Looks up a vehicle type by its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|vt| vt.code() == code)
    }

    /// Returns the snake_case name used in configuration and requests.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Tractor => "tractor",
            VehicleType::Emergency => "emergency",
            VehicleType::Diplomat => "diplomat",
            VehicleType::Foreign => "foreign",
            VehicleType::Military => "military",
            VehicleType::Bus => "bus",
            VehicleType::Car => "car",
            VehicleType::Other => "other",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a vehicle type from its name (case-insensitive) or numeric code.
///
/// ```
/// use congestion_tax::models::VehicleType;
///
/// assert_eq!("Car".parse::<VehicleType>().unwrap(), VehicleType::Car);
/// assert_eq!("3".parse::<VehicleType>().unwrap(), VehicleType::Emergency);
/// assert!("hovercraft".parse::<VehicleType>().is_err());
/// ```
impl FromStr for VehicleType {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::from_code(code).ok_or_else(|| TaxError::UnknownVehicleType {
                value: s.to_string(),
            });
        }

        Self::ALL
            .into_iter()
            .find(|vt| vt.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TaxError::UnknownVehicleType {
                value: s.to_string(),
            })
    }
}

/// A vehicle subject to congestion tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// The kind of vehicle.
    pub vehicle_type: VehicleType,
}

impl Vehicle {
    /// Creates a vehicle of the given type.
    pub fn new(vehicle_type: VehicleType) -> Self {
        Self { vehicle_type }
    }
}

/// A city with its own congestion tax ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    /// Gothenburg, Sweden.
    Gothenburg,
}

impl City {
    /// Returns the snake_case name, also used as the ruleset file stem.
    pub fn as_str(self) -> &'static str {
        match self {
            City::Gothenburg => "gothenburg",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
