pub mod aggregator;
pub mod categories;
pub mod classifier;
pub mod distance;
pub mod normalizer;
pub mod session;

pub use crate::domain::model::{Coordinate, Landmark, RawPlace, SearchResult};
pub use crate::domain::ports::{ConfigProvider, Geocoder, PlacesProvider};
pub use crate::utils::error::Result;
