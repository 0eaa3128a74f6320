//! Offline tooling for recorded telemetry: loading tables, fitting simple
//! models to them, and plotting the result.

#![warn(future_incompatible, rust_2018_compatibility, rust_2018_idioms, unused)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::{
    error::TelemetryError,
    fit::{acceleration_samples, fit_linear, relative_acceleration, FitError, LinearFit},
    histogram::{linspace, Histogram},
    models::{
        corrected_acceleration, corrected_acceleration_rows, corrected_acceleration_with,
        CorrectionConstants, DecelerationModel, TURN_CORRECTION,
    },
    table::{load_trimmed, Delimiter, TelemetryTable},
};

pub mod config;
mod error;
mod fit;
mod histogram;
mod models;
pub mod plot;
mod table;
