//! BatteryIQ library - time-of-use tariff coverage checks
//!
//! This module exports the tariff model and validator for the CLI and for
//! integration testing.

pub mod cli;
pub mod config;
pub mod plan;
pub mod report;
pub mod tariff;
