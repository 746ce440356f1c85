pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::{CliConfig, OutputFormat};

#[cfg(feature = "cli")]
mod cli_config {
    use crate::adapters::google::{DEFAULT_GEOCODE_ENDPOINT, DEFAULT_PLACES_ENDPOINT};
    use crate::config::toml_config::TomlConfig;
    use crate::core::ConfigProvider;
    use crate::domain::model::Coordinate;
    use crate::utils::error::{HomeScopeError, Result};
    use crate::utils::validation::{self, Validate};
    use clap::{Parser, ValueEnum};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
    #[serde(rename_all = "lowercase")]
    pub enum OutputFormat {
        #[default]
        Table,
        Json,
        Csv,
    }

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "homescope")]
    #[command(about = "Find landmarks near an address, grouped by category and sorted by distance")]
    pub struct CliConfig {
        /// Address to search around
        #[arg(short, long, conflicts_with = "location")]
        pub address: Option<String>,

        /// Search origin as `lat,lng`, skipping geocoding
        #[arg(short, long, allow_hyphen_values = true)]
        pub location: Option<Coordinate>,

        /// Comma-separated categories; nearest places of any kind when empty
        #[arg(short, long, value_delimiter = ',')]
        pub categories: Vec<String>,

        #[arg(long, env = "GOOGLE_GEOCODING_API_KEY", hide_env_values = true)]
        pub api_key: Option<String>,

        #[arg(long)]
        pub geocode_endpoint: Option<String>,

        #[arg(long)]
        pub places_endpoint: Option<String>,

        /// TOML file supplying anything not given on the command line
        #[arg(long)]
        pub config: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        pub format: OutputFormat,

        #[arg(long, help = "List the searchable categories and exit")]
        pub list_categories: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// 命令列參數優先，檔案只補上未指定的欄位
        pub fn merge_file(&mut self, file: TomlConfig) -> Result<()> {
            if self.api_key.is_none() {
                self.api_key = Some(file.provider.api_key);
            }
            if self.geocode_endpoint.is_none() {
                self.geocode_endpoint = file.provider.geocode_endpoint;
            }
            if self.places_endpoint.is_none() {
                self.places_endpoint = file.provider.places_endpoint;
            }
            if self.categories.is_empty() {
                self.categories = file.search.categories;
            }
            if self.address.is_none() && self.location.is_none() {
                self.address = file.search.address;
                if let Some(location) = file.search.location {
                    self.location = Some(location.parse()?);
                }
            }
            Ok(())
        }
    }

    impl ConfigProvider for CliConfig {
        fn api_key(&self) -> &str {
            self.api_key.as_deref().unwrap_or("")
        }

        fn geocode_endpoint(&self) -> &str {
            self.geocode_endpoint
                .as_deref()
                .unwrap_or(DEFAULT_GEOCODE_ENDPOINT)
        }

        fn places_endpoint(&self) -> &str {
            self.places_endpoint
                .as_deref()
                .unwrap_or(DEFAULT_PLACES_ENDPOINT)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            let api_key = validation::validate_required_field("api_key", &self.api_key)?;
            validation::validate_non_empty_string("api_key", api_key)?;
            // 設定檔中未解析的 ${VAR} 代表環境變數沒設定
            if api_key.starts_with("${") {
                return Err(HomeScopeError::MissingConfigError {
                    field: format!("api_key ({})", api_key),
                });
            }
            validation::validate_url("geocode_endpoint", self.geocode_endpoint())?;
            validation::validate_url("places_endpoint", self.places_endpoint())?;
            validation::validate_categories("categories", &self.categories)?;

            match (&self.address, &self.location) {
                (Some(address), _) => validation::validate_non_empty_string("address", address),
                (None, Some(_)) => Ok(()),
                (None, None) => Err(HomeScopeError::validation(
                    "Either --address or --location is required",
                )),
            }
        }
    }

}
