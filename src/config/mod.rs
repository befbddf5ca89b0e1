//! Taxation rule sources for the congestion tax engine.
//!
//! This module defines the [`TaxationSource`] contract the calculator pulls
//! its rules from, the immutable [`TaxationConfig`] snapshot built from it,
//! and two sources: rules held in memory and rules read from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use congestion_tax::config::{TaxationConfig, YamlTaxationSource};
//! use congestion_tax::models::City;
//!
//! let source = YamlTaxationSource::new("./config");
//! let config = TaxationConfig::fetch(&source, City::Gothenburg).unwrap();
//! println!("Charge interval: {} min", config.charge_interval().num_minutes());
//! ```

mod loader;
mod source;
mod static_source;
mod taxation_config;
mod types;

pub use loader::YamlTaxationSource;
pub use source::TaxationSource;
pub use static_source::StaticTaxationSource;
pub use taxation_config::TaxationConfig;
pub use types::{CityRulesConfig, HolidayEntry, HolidaysConfig};
