use crate::domain::model::{Coordinate, RawPlace};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn geocode_endpoint(&self) -> &str;
    fn places_endpoint(&self) -> &str;
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// First matching coordinate for a free-text address.
    async fn geocode(&self, address: &str) -> Result<Coordinate>;
}

#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Proximity-ranked places of any type, at most ten.
    async fn nearest(&self, origin: Coordinate) -> Result<Vec<RawPlace>>;

    /// Proximity-ranked places for one registry category.
    async fn by_category(&self, origin: Coordinate, category: &str) -> Result<Vec<RawPlace>>;
}
