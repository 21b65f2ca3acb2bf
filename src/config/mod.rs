//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load the payroll rate table from YAML
//! files: statutory reference amounts, insurance contribution rates, personal
//! deductions, and the progressive income-tax schedule.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/vn2024").unwrap();
//! println!("Loaded rates: {}", config.rates().metadata.name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EmployeeInsuranceRates, EmployerInsuranceRates, IncomeTaxConfig, InsuranceConfig, RateTable,
    RateTableMetadata, RegionalMinWages, StatutoryConfig, TaxBracket,
};
