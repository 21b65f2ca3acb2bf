//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! rate table from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{IncomeTaxConfig, InsuranceConfig, RateTable, StatutoryConfig};

/// Loads and provides access to the payroll rate table.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/vn2024/
/// ├── statutory.yaml            # Metadata, base salary, regional minimum wages
/// ├── insurance.yaml            # Employee and employer contribution rates
/// └── personal_income_tax.yaml  # Deductions and progressive brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/vn2024").unwrap();
/// println!("Loaded rates: {}", loader.rates().metadata.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: RateTable,
}

impl ConfigLoader {
    /// Loads and validates the rate table from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The assembled table breaks a structural rule (`InvalidRateTable`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/vn2024")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statutory = Self::load_yaml::<StatutoryConfig>(&path.join("statutory.yaml"))?;
        let insurance = Self::load_yaml::<InsuranceConfig>(&path.join("insurance.yaml"))?;
        let income_tax =
            Self::load_yaml::<IncomeTaxConfig>(&path.join("personal_income_tax.yaml"))?;

        let rates = RateTable::from_parts(statutory, insurance, income_tax);
        let loader = Self::from_rates(rates)?;

        debug!(
            path = %path.display(),
            code = %loader.rates.metadata.code,
            brackets = loader.rates.tax_brackets.len(),
            "Loaded rate table"
        );

        Ok(loader)
    }

    /// Wraps an already-built rate table after validating it.
    pub fn from_rates(rates: RateTable) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
