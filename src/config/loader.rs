//! YAML-backed configuration source.
//!
//! This module provides the [`YamlTaxationSource`] type for reading
//! taxation rules from YAML files.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};

use crate::error::{TaxError, TaxResult};
use crate::models::{City, TaxationTimeBand, VehicleType};

use super::source::TaxationSource;
use super::types::{CityRulesConfig, HolidaysConfig};

/// Reads taxation rules from a configuration directory.
///
/// Files are read on every call; caching is the calculator's concern.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── holidays.yaml         # Holiday calendar, shared by all cities
/// └── cities/
///     └── gothenburg.yaml   # Interval, free vehicles, fee bands
/// ```
///
/// # Example
///
/// ```no_run
/// use congestion_tax::config::{TaxationSource, YamlTaxationSource};
/// use congestion_tax::models::City;
///
/// let source = YamlTaxationSource::new("./config");
/// let bands = source.time_bands(City::Gothenburg)?;
/// println!("{} fee bands", bands.len());
/// # Ok::<(), congestion_tax::error::TaxError>(())
/// ```
#[derive(Debug, Clone)]
pub struct YamlTaxationSource {
    root: PathBuf,
}

impl YamlTaxationSource {
    /// Creates a source reading from the given configuration directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the configuration directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> TaxResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TaxError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TaxError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Converts the configured interval, which must be positive and fit a
    /// [`Duration`].
    fn charge_interval(rules: &CityRulesConfig) -> TaxResult<Duration> {
        Duration::try_minutes(rules.charge_interval_minutes)
            .filter(|interval| *interval > Duration::zero())
            .ok_or_else(|| TaxError::InvalidConfig {
                message: format!(
                    "{}: charge interval must be a positive number of minutes, got {}",
                    rules.name, rules.charge_interval_minutes
                ),
            })
    }

    /// Loads and validates the ruleset file of a city.
    fn load_city(&self, city: City) -> TaxResult<CityRulesConfig> {
        let path = self
            .root
            .join("cities")
            .join(format!("{}.yaml", city.as_str()));
        let rules = Self::load_yaml::<CityRulesConfig>(&path)?;

        Self::charge_interval(&rules)?;

        for (index, band) in rules.time_bands.iter().enumerate() {
            if band.start_time > band.end_time {
                return Err(TaxError::InvalidConfig {
                    message: format!(
                        "{}: time band {} starts at {} after it ends at {}",
                        rules.name, index, band.start_time, band.end_time
                    ),
                });
            }
            if band.fee == 0 {
                return Err(TaxError::InvalidConfig {
                    message: format!("{}: time band {} has a zero fee", rules.name, index),
                });
            }
        }

        Ok(rules)
    }
}

impl TaxationSource for YamlTaxationSource {
    fn interval_length(&self, city: City) -> TaxResult<Duration> {
        let rules = self.load_city(city)?;
        Self::charge_interval(&rules)
    }

    fn free_vehicle_types(&self, city: City) -> TaxResult<HashSet<VehicleType>> {
        let rules = self.load_city(city)?;
        Ok(rules.free_vehicle_types.into_iter().collect())
    }

    fn holidays(&self) -> TaxResult<BTreeSet<NaiveDate>> {
        let config = Self::load_yaml::<HolidaysConfig>(&self.root.join("holidays.yaml"))?;
        Ok(config.holidays.into_iter().map(|h| h.date).collect())
    }

    fn time_bands(&self, city: City) -> TaxResult<Vec<TaxationTimeBand>> {
        let rules = self.load_city(city)?;
        Ok(rules.time_bands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticTaxationSource;

    fn config_path() -> &'static str {
        "./config"
    }

    #[test]
    fn test_load_interval_length() {
        let source = YamlTaxationSource::new(config_path());
        let interval = source.interval_length(City::Gothenburg);
        assert!(interval.is_ok(), "Failed to load config: {:?}", interval.err());
        assert_eq!(interval.unwrap(), Duration::minutes(60));
    }

    #[test]
    fn test_shipped_yaml_matches_builtin_ruleset() {
        let yaml = YamlTaxationSource::new(config_path());
        let builtin = StaticTaxationSource::gothenburg();

        assert_eq!(
            yaml.free_vehicle_types(City::Gothenburg).unwrap(),
            builtin.free_vehicle_types(City::Gothenburg).unwrap()
        );
        assert_eq!(yaml.holidays().unwrap(), builtin.holidays().unwrap());
        assert_eq!(
            yaml.time_bands(City::Gothenburg).unwrap(),
            builtin.time_bands(City::Gothenburg).unwrap()
        );
    }

    #[test]
    fn test_time_bands_keep_file_order() {
        let source = YamlTaxationSource::new(config_path());
        let bands = source.time_bands(City::Gothenburg).unwrap();

        let fees: Vec<u32> = bands.iter().map(|b| b.fee).collect();
        assert_eq!(fees, vec![8, 13, 18, 13, 8, 13, 18, 13, 8]);
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let source = YamlTaxationSource::new("/nonexistent/path");

        match source.interval_length(City::Gothenburg) {
            Err(TaxError::ConfigNotFound { path }) => {
                assert!(path.contains("gothenburg.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }

        match source.holidays() {
            Err(TaxError::ConfigNotFound { path }) => {
                assert!(path.contains("holidays.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    fn scratch_dir(name: &str, city_yaml: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "congestion-tax-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(dir.join("cities")).unwrap();
        fs::write(dir.join("cities").join("gothenburg.yaml"), city_yaml).unwrap();
        dir
    }

    #[test]
    fn test_reversed_band_is_invalid_config() {
        let dir = scratch_dir(
            "reversed-band",
            r#"
name: Gothenburg
charge_interval_minutes: 60
time_bands:
  - start_time: "09:00:00"
    end_time: "08:00:00"
    fee: 10
"#,
        );
        let source = YamlTaxationSource::new(&dir);

        match source.time_bands(City::Gothenburg) {
            Err(TaxError::InvalidConfig { message }) => {
                assert!(message.contains("time band 0"), "got: {}", message);
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_zero_interval_is_invalid_config() {
        let dir = scratch_dir(
            "zero-interval",
            "name: Gothenburg\ncharge_interval_minutes: 0\ntime_bands: []\n",
        );
        let source = YamlTaxationSource::new(&dir);

        assert!(matches!(
            source.interval_length(City::Gothenburg),
            Err(TaxError::InvalidConfig { .. })
        ));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_out_of_range_interval_is_invalid_config() {
        let dir = scratch_dir(
            "huge-interval",
            "name: Gothenburg\ncharge_interval_minutes: 9223372036854775807\ntime_bands: []\n",
        );
        let source = YamlTaxationSource::new(&dir);

        match source.interval_length(City::Gothenburg) {
            Err(TaxError::InvalidConfig { message }) => {
                assert!(message.contains("9223372036854775807"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let dir = scratch_dir("malformed", "name: [unterminated\n");
        let source = YamlTaxationSource::new(&dir);

        match source.free_vehicle_types(City::Gothenburg) {
            Err(TaxError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("gothenburg.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }
}
