use thiserror::Error;

#[derive(Error, Debug)]
pub enum HomeScopeError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid category: {category}")]
    InvalidCategoryError { category: String },

    #[error("Geocoding error: {message}")]
    GeocodingError { message: String },

    #[error("Places provider error: {message}")]
    PlacesProviderError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Upstream,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HomeScopeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn geocoding(message: impl Into<String>) -> Self {
        Self::GeocodingError {
            message: message.into(),
        }
    }

    pub fn places(message: impl Into<String>) -> Self {
        Self::PlacesProviderError {
            message: message.into(),
        }
    }

    /// HTTP 狀態碼：請求問題為 400，上游與系統問題為 500
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError { .. } | Self::InvalidCategoryError { .. } => 400,
            _ => 500,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } | Self::InvalidCategoryError { .. } => {
                ErrorCategory::Request
            }
            Self::GeocodingError { .. } | Self::PlacesProviderError { .. } => {
                ErrorCategory::Upstream
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::High,
            ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidationError { .. } => "Check the address or the lat,lng values and try again",
            Self::InvalidCategoryError { .. } => {
                "Run with --list-categories to see the supported categories"
            }
            Self::GeocodingError { .. } => {
                "Try a more specific address, or check the API key and network connection"
            }
            Self::PlacesProviderError { .. } => {
                "Check the API key quota and network connection, then retry the search"
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => {
                "Review the configuration file, flags and environment variables"
            }
            Self::IoError(_) => "Check file permissions and paths",
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try another output format"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { message } => format!("Invalid input: {}", message),
            Self::InvalidCategoryError { category } => {
                format!("'{}' is not a supported landmark category", category)
            }
            Self::GeocodingError { message } => format!("Could not locate address: {}", message),
            Self::PlacesProviderError { .. } => "Could not load nearby places".to_string(),
            other => other.to_string(),
        }
    }

    /// 對外回應內容：上游錯誤只回傳概略訊息，詳細原因僅寫入日誌
    pub fn public_message(&self) -> String {
        match self {
            Self::ValidationError { message } => message.clone(),
            Self::InvalidCategoryError { category } => format!("Invalid category: {}", category),
            Self::GeocodingError { message } => message.clone(),
            Self::PlacesProviderError { .. } => "Failed to fetch nearby places".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HomeScopeError>;
