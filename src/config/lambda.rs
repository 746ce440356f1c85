use crate::adapters::google::{DEFAULT_GEOCODE_ENDPOINT, DEFAULT_PLACES_ENDPOINT};
use crate::core::ConfigProvider;
use crate::utils::error::{HomeScopeError, Result};
use crate::utils::validation::{self, Validate};
use std::env;

pub const API_KEY_VAR: &str = "GOOGLE_GEOCODING_API_KEY";
pub const GEOCODE_ENDPOINT_VAR: &str = "GOOGLE_GEOCODE_ENDPOINT";
pub const PLACES_ENDPOINT_VAR: &str = "GOOGLE_PLACES_ENDPOINT";

/// Settings read once from the function's environment at cold start.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_key: String,
    pub geocode_endpoint: String,
    pub places_endpoint: String,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            api_key: var(API_KEY_VAR).ok_or_else(|| HomeScopeError::ConfigError {
                message: format!("{} environment variable is required", API_KEY_VAR),
            })?,
            geocode_endpoint: var(GEOCODE_ENDPOINT_VAR)
                .unwrap_or_else(|| DEFAULT_GEOCODE_ENDPOINT.to_string()),
            places_endpoint: var(PLACES_ENDPOINT_VAR)
                .unwrap_or_else(|| DEFAULT_PLACES_ENDPOINT.to_string()),
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn geocode_endpoint(&self) -> &str {
        &self.geocode_endpoint
    }

    fn places_endpoint(&self) -> &str {
        &self.places_endpoint
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string(API_KEY_VAR, &self.api_key)?;
        validation::validate_url(GEOCODE_ENDPOINT_VAR, &self.geocode_endpoint)?;
        validation::validate_url(PLACES_ENDPOINT_VAR, &self.places_endpoint)?;
        Ok(())
    }
}
