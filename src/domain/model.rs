use crate::utils::error::{HomeScopeError, Result};
use crate::utils::validation::parse_degrees;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point in degrees. Provider coordinates are trusted and not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parses the `lat,lng` text form.
impl FromStr for Coordinate {
    type Err = HomeScopeError;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s.split_once(',').ok_or_else(|| {
            HomeScopeError::validation(format!("Expected 'lat,lng' but got '{}'", s))
        })?;
        Ok(Self::new(parse_degrees("lat", lat)?, parse_degrees("lng", lng)?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGeometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<RawLocation>,
}

/// Place record as the provider returns it. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<RawGeometry>,
}

impl RawPlace {
    pub fn types(&self) -> &[String] {
        self.types.as_deref().unwrap_or(&[])
    }

    /// Only present when both lat and lng were supplied.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let location = self.geometry.as_ref()?.location.as_ref()?;
        Some(Coordinate::new(location.lat?, location.lng?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub id: String,
    pub name: String,
    pub category: String,
    pub distance_miles: f64,
    pub lat: f64,
    pub lng: f64,
}

impl Landmark {
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.category.split(", ")
    }

    /// 合併類別標籤：已存在則略過，否則以 ", " 附加
    pub fn merge_category(&mut self, label: &str) {
        if self.categories().any(|existing| existing == label) {
            return;
        }
        self.category.push_str(", ");
        self.category.push_str(label);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMapping {
    pub display_name: &'static str,
    pub google_keyword: Option<&'static str>,
    pub google_type: Option<&'static str>,
}

/// Committed output of one aggregation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub generation: u64,
    pub origin: Coordinate,
    pub categories: Vec<String>,
    pub landmarks: Vec<Landmark>,
    pub completed_at: DateTime<Utc>,
}
