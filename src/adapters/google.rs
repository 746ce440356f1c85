use crate::core::categories;
use crate::core::aggregator::NEAREST_LIMIT;
use crate::domain::model::{Coordinate, RawPlace};
use crate::domain::ports::{ConfigProvider, Geocoder, PlacesProvider};
use crate::utils::error::{HomeScopeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_PLACES_ENDPOINT: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: Option<String>,
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: Coordinate,
}

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: Option<String>,
    error_message: Option<String>,
    results: Option<Vec<RawPlace>>,
}

/// Gateway to the Google Geocoding and Places Nearby Search APIs.
#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    client: Client,
    api_key: String,
    geocode_endpoint: String,
    places_endpoint: String,
}

impl GoogleMapsClient {
    pub fn new(
        api_key: impl Into<String>,
        geocode_endpoint: impl Into<String>,
        places_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            geocode_endpoint: geocode_endpoint.into(),
            places_endpoint: places_endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.api_key(),
            config.geocode_endpoint(),
            config.places_endpoint(),
        )
    }

    /// Nearby Search ranked by distance, optionally narrowed by keyword or type.
    async fn nearby_search(&self, origin: Coordinate, filter: Option<(&str, &str)>) -> Result<Vec<RawPlace>> {
        let mut params = vec![
            ("location", origin.to_string()),
            ("rankby", "distance".to_string()),
        ];
        if let Some((name, value)) = filter {
            params.push((name, value.to_string()));
        }
        params.push(("key", self.api_key.clone()));

        tracing::debug!(
            "📡 Nearby search at {} ({:?}) via {}",
            origin,
            filter,
            self.places_endpoint
        );

        let response = self
            .client
            .get(&self.places_endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ Places request failed: {}", e);
                HomeScopeError::places(format!("request failed: {}", e))
            })?;

        if !response.status().is_success() {
            tracing::error!("❌ Places API returned HTTP {}", response.status());
            return Err(HomeScopeError::places(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: NearbySearchResponse = response.json().await.map_err(|e| {
            tracing::error!("❌ Malformed places response: {}", e);
            HomeScopeError::places(format!("malformed response: {}", e))
        })?;

        match body.status.as_deref() {
            None | Some("OK") | Some("ZERO_RESULTS") => {}
            Some(status) => {
                let detail = body.error_message.unwrap_or_default();
                tracing::error!("❌ Places API status {}: {}", status, detail);
                return Err(HomeScopeError::places(format!("{}: {}", status, detail)));
            }
        }

        Ok(body.results.unwrap_or_default())
    }
}

#[async_trait]
impl Geocoder for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Coordinate> {
        tracing::debug!("📡 Geocoding '{}' via {}", address, self.geocode_endpoint);

        let response = self
            .client
            .get(&self.geocode_endpoint)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ Geocoding request failed: {}", e);
                HomeScopeError::geocoding("Geocoding request failed")
            })?;

        if !response.status().is_success() {
            tracing::error!("❌ Geocoding API returned HTTP {}", response.status());
            return Err(HomeScopeError::geocoding(format!(
                "Geocoding API error: {}",
                response.status()
            )));
        }

        let body: GeocodeResponse = response.json().await.map_err(|e| {
            tracing::error!("❌ Malformed geocoding response: {}", e);
            HomeScopeError::geocoding("Malformed geocoding response")
        })?;

        if body.status.as_deref() != Some("OK") {
            tracing::warn!(
                "⚠️ Geocoding status {:?} for '{}'",
                body.status,
                address
            );
            return Err(HomeScopeError::geocoding(
                body.error_message
                    .unwrap_or_else(|| "Geocoding failed".to_string()),
            ));
        }

        // 多個結果時只取第一個，不做消歧
        body.results
            .first()
            .map(|r| r.geometry.location)
            .ok_or_else(|| HomeScopeError::geocoding("No results for address"))
    }
}

#[async_trait]
impl PlacesProvider for GoogleMapsClient {
    async fn nearest(&self, origin: Coordinate) -> Result<Vec<RawPlace>> {
        let mut places = self.nearby_search(origin, None).await?;
        places.truncate(NEAREST_LIMIT);
        Ok(places)
    }

    async fn by_category(&self, origin: Coordinate, category: &str) -> Result<Vec<RawPlace>> {
        let mapping =
            categories::lookup(category).ok_or_else(|| HomeScopeError::InvalidCategoryError {
                category: category.to_string(),
            })?;

        // 有關鍵字時以關鍵字查詢，否則退回類型
        let filter = match (mapping.google_keyword, mapping.google_type) {
            (Some(keyword), _) => Some(("keyword", keyword)),
            (None, Some(place_type)) => Some(("type", place_type)),
            (None, None) => None,
        };

        self.nearby_search(origin, filter).await
    }
}
