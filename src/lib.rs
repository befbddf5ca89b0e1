//! Congestion Tax Engine
//!
//! This crate computes the daily congestion (road toll) tax for a vehicle
//! from its timestamped passages through toll stations, using a city's
//! time-of-day fee bands, charge interval, holidays and toll-free vehicles.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
