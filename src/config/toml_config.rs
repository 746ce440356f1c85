use crate::adapters::google::{DEFAULT_GEOCODE_ENDPOINT, DEFAULT_PLACES_ENDPOINT};
use crate::core::ConfigProvider;
use crate::utils::error::{HomeScopeError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub provider: ProviderConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    pub geocode_endpoint: Option<String>,
    pub places_endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub address: Option<String>,
    /// `lat,lng` text form
    pub location: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HomeScopeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HomeScopeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GOOGLE_GEOCODING_API_KEY})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HomeScopeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("provider.api_key", &self.provider.api_key)?;
        if self.provider.api_key.starts_with("${") {
            return Err(HomeScopeError::MissingConfigError {
                field: format!("provider.api_key ({})", self.provider.api_key),
            });
        }

        validation::validate_url("provider.geocode_endpoint", self.geocode_endpoint())?;
        validation::validate_url("provider.places_endpoint", self.places_endpoint())?;
        validation::validate_categories("search.categories", &self.search.categories)?;

        if let Some(location) = &self.search.location {
            location
                .parse::<crate::domain::model::Coordinate>()
                .map_err(|e| HomeScopeError::InvalidConfigValueError {
                    field: "search.location".to_string(),
                    value: location.clone(),
                    reason: e.to_string(),
                })?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_key(&self) -> &str {
        &self.provider.api_key
    }

    fn geocode_endpoint(&self) -> &str {
        self.provider
            .geocode_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_GEOCODE_ENDPOINT)
    }

    fn places_endpoint(&self) -> &str {
        self.provider
            .places_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_PLACES_ENDPOINT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
