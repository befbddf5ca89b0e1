//! Application state for the congestion tax API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::TaxCalculator;

/// Shared application state.
///
/// Holds the single, process-wide tax calculator; its rules are loaded on
/// the first request and shared by all later ones.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<TaxCalculator>,
}

impl AppState {
    /// Creates a new application state around the given calculator.
    pub fn new(calculator: TaxCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }

    /// Returns a reference to the tax calculator.
    pub fn calculator(&self) -> &TaxCalculator {
        &self.calculator
    }
}
