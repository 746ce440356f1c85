pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::GoogleMapsClient;
pub use api::{ApiHandler, ApiResponse};
pub use config::{lambda::LambdaConfig, toml_config::TomlConfig};
pub use core::{aggregator::Aggregator, session::SearchOutcome, session::SearchSession};
pub use domain::model::{Coordinate, Landmark, RawPlace, SearchResult};
pub use utils::error::{HomeScopeError, Result};
