//! HTTP API module for the congestion tax engine.
//!
//! This module provides the REST endpoint that computes a vehicle's
//! daily congestion tax from a list of passages.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{TaxRequest, VehicleTypeId, parse_passage};
pub use response::{ApiError, TaxResponse};
pub use state::AppState;
