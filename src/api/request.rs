//! Request types for the congestion tax API.
//!
//! This module defines the JSON request structure for the `/tax` endpoint
//! and its conversion into domain types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{TaxError, TaxResult};
use crate::models::{Vehicle, VehicleType};

/// Accepted passage timestamp formats, tried in order.
const PASSAGE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Request body for the `/tax` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRequest {
    /// The vehicle type, by name (`"car"`) or numeric code (`8`).
    pub vehicle_type: VehicleTypeId,
    /// Passage timestamps for one day, formatted `YYYY-MM-DD HH:mm:ss`.
    #[serde(default)]
    pub passages: Vec<String>,
}

/// A vehicle type identifier as sent by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VehicleTypeId {
    /// Numeric code. Any integer is accepted here and range-checked on
    /// resolution.
    Code(i64),
    /// Name or code as text.
    Name(String),
}

impl VehicleTypeId {
    /// Resolves the identifier to a vehicle type.
    pub fn resolve(&self) -> TaxResult<VehicleType> {
        match self {
            VehicleTypeId::Code(code) => {
                u8::try_from(*code)
                    .ok()
                    .and_then(VehicleType::from_code)
                    .ok_or_else(|| TaxError::UnknownVehicleType {
                        value: code.to_string(),
                    })
            }
            VehicleTypeId::Name(name) => name.parse(),
        }
    }
}

impl TaxRequest {
    /// Validates the request and converts it into a vehicle and its passages.
    pub fn into_parts(self) -> TaxResult<(Vehicle, Vec<NaiveDateTime>)> {
        let vehicle = Vehicle::new(self.vehicle_type.resolve()?);
        let passages = self
            .passages
            .iter()
            .map(|raw| parse_passage(raw))
            .collect::<TaxResult<Vec<_>>>()?;
        Ok((vehicle, passages))
    }
}

/// Parses a passage timestamp.
///
/// # Example
///
/// ```
/// use congestion_tax::api::parse_passage;
///
/// let passage = parse_passage("2013-02-08 06:27:00").unwrap();
/// assert_eq!(passage.to_string(), "2013-02-08 06:27:00");
/// assert!(parse_passage("2013-02-08").is_err());
/// ```
pub fn parse_passage(raw: &str) -> TaxResult<NaiveDateTime> {
    let trimmed = raw.trim();
    let mut last_error = None;

    for format in PASSAGE_FORMATS {
        match NaiveDateTime::parse_from_str(trimmed, format) {
            Ok(passage) => return Ok(passage),
            Err(e) => last_error = Some(e),
        }
    }

    Err(TaxError::InvalidTimestamp {
        value: raw.to_string(),
        message: last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unrecognized format".to_string()),
    })
}
