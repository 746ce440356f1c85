//! Query endpoints in front of the pipeline, independent of any transport.
//!
//! | route     | parameters                  | success body          |
//! |-----------|-----------------------------|-----------------------|
//! | `geocode` | `address`                   | `{lat, lng}`          |
//! | `nearby`  | `lat`, `lng`                | `[RawPlace]`, at most 10 |
//! | `places`  | `lat`, `lng`, `category`    | `[RawPlace]`          |
//!
//! Failures answer `{error}` with 400 for bad requests and 500 for upstream
//! problems.

use crate::domain::model::Coordinate;
use crate::domain::ports::{Geocoder, PlacesProvider};
use crate::utils::error::{HomeScopeError, Result};
use crate::utils::validation::{parse_degrees, required_param};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;

pub type Query = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: json!({ "error": message.into() }),
        }
    }
}

impl From<HomeScopeError> for ApiResponse {
    fn from(e: HomeScopeError) -> Self {
        Self::error(e.status_code(), e.public_message())
    }
}

pub struct ApiHandler<G: Geocoder, P: PlacesProvider> {
    geocoder: G,
    places: P,
}

impl<G: Geocoder, P: PlacesProvider> ApiHandler<G, P> {
    pub fn new(geocoder: G, places: P) -> Self {
        Self { geocoder, places }
    }

    /// Routes on the last path segment, so `/api/geocode` and `geocode` both work.
    pub async fn handle(&self, path: &str, query: &Query) -> ApiResponse {
        let route = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");

        let result = match route {
            "geocode" => self.geocode(query).await,
            "nearby" => self.nearby(query).await,
            "places" => self.places(query).await,
            _ => {
                tracing::warn!("⚠️ Unknown route: {}", path);
                return ApiResponse::error(404, format!("Unknown endpoint: {}", path));
            }
        };

        match result {
            Ok(body) => ApiResponse::ok(body),
            Err(e) => {
                if e.status_code() >= 500 {
                    tracing::error!("❌ {} failed: {}", route, e);
                } else {
                    tracing::debug!("🚫 {} rejected: {}", route, e);
                }
                e.into()
            }
        }
    }

    pub async fn geocode(&self, query: &Query) -> Result<Value> {
        let address = required_param("address", query.get("address"))?;
        let coordinate = self.geocoder.geocode(address).await?;
        Ok(serde_json::to_value(coordinate)?)
    }

    pub async fn nearby(&self, query: &Query) -> Result<Value> {
        let origin = origin_from(query)?;
        let places = self.places.nearest(origin).await?;
        Ok(serde_json::to_value(places)?)
    }

    pub async fn places(&self, query: &Query) -> Result<Value> {
        let origin = origin_from(query)?;
        let category = required_param("category", query.get("category"))?;
        let places = self.places.by_category(origin, category).await?;
        Ok(serde_json::to_value(places)?)
    }
}

fn origin_from(query: &Query) -> Result<Coordinate> {
    let lat = required_param("lat", query.get("lat"))
        .map_err(|_| HomeScopeError::validation("Missing lat or lng"))?;
    let lng = required_param("lng", query.get("lng"))
        .map_err(|_| HomeScopeError::validation("Missing lat or lng"))?;
    Ok(Coordinate::new(
        parse_degrees("lat", lat)?,
        parse_degrees("lng", lng)?,
    ))
}
