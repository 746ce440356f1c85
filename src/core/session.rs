use crate::core::aggregator::Aggregator;
use crate::domain::model::{Coordinate, SearchResult};
use crate::domain::ports::{Geocoder, PlacesProvider};
use crate::utils::error::Result;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The run was the latest one and replaced the current result.
    Current(SearchResult),
    /// A newer run started before this one finished; its result was dropped.
    Superseded { generation: u64, latest: u64 },
}

impl SearchOutcome {
    pub fn into_current(self) -> Option<SearchResult> {
        match self {
            Self::Current(result) => Some(result),
            Self::Superseded { .. } => None,
        }
    }
}

/// Holds one user's search state. Every run gets a generation number and
/// only the newest run may replace the committed result.
pub struct SearchSession<G: Geocoder, P: PlacesProvider> {
    geocoder: G,
    aggregator: Aggregator<P>,
    generation: AtomicU64,
    current: Mutex<Option<SearchResult>>,
}

impl<G: Geocoder, P: PlacesProvider> SearchSession<G, P> {
    pub fn new(geocoder: G, places: P) -> Self {
        Self {
            geocoder,
            aggregator: Aggregator::new(places),
            generation: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// 地址查詢失敗時整個搜尋中止，不會查詢地標
    pub async fn search_address(&self, address: &str, categories: &[String]) -> Result<SearchOutcome> {
        let generation = self.begin();
        tracing::info!("🏠 Search #{}: geocoding '{}'", generation, address);

        let origin = self.geocoder.geocode(address).await?;
        tracing::debug!("📌 Search #{}: '{}' resolved to {}", generation, address, origin);

        self.run(generation, origin, categories).await
    }

    pub async fn search_location(&self, origin: Coordinate, categories: &[String]) -> Result<SearchOutcome> {
        let generation = self.begin();
        tracing::info!("🏠 Search #{}: location {}", generation, origin);
        self.run(generation, origin, categories).await
    }

    pub async fn current(&self) -> Option<SearchResult> {
        self.current.lock().await.clone()
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn run(&self, generation: u64, origin: Coordinate, categories: &[String]) -> Result<SearchOutcome> {
        let landmarks = self.aggregator.aggregate(origin, categories).await?;

        let result = SearchResult {
            generation,
            origin,
            categories: categories.to_vec(),
            landmarks,
            completed_at: Utc::now(),
        };
        Ok(self.commit(result).await)
    }

    async fn commit(&self, result: SearchResult) -> SearchOutcome {
        let mut current = self.current.lock().await;
        let latest = self.latest_generation();

        if result.generation != latest {
            tracing::info!(
                "🗑️ Search #{} superseded by #{}, discarding {} landmarks",
                result.generation,
                latest,
                result.landmarks.len()
            );
            return SearchOutcome::Superseded {
                generation: result.generation,
                latest,
            };
        }

        *current = Some(result.clone());
        SearchOutcome::Current(result)
    }
}
