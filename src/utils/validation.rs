use crate::utils::error::{HomeScopeError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HomeScopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HomeScopeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HomeScopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| HomeScopeError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HomeScopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 檢查每個類別都存在於類別表中
pub fn validate_categories(field_name: &str, categories: &[String]) -> Result<()> {
    for category in categories {
        if crate::core::categories::lookup(category).is_none() {
            return Err(HomeScopeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: category.clone(),
                reason: format!(
                    "Unknown category. Valid categories: {}",
                    crate::core::categories::names().join(", ")
                ),
            });
        }
    }
    Ok(())
}

/// 請求參數：缺少或空白時回傳 ValidationError
pub fn required_param<'a>(name: &str, value: Option<&'a String>) -> Result<&'a str> {
    match value.map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(HomeScopeError::validation(format!("Missing {}", name))),
    }
}

pub fn parse_degrees(name: &str, value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(HomeScopeError::validation(format!(
            "Invalid {}: '{}' is not a number",
            name, value
        ))),
    }
}
