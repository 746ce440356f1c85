use crate::core::normalizer::{classify_all, normalize};
use crate::domain::model::{Coordinate, Landmark};
use crate::domain::ports::PlacesProvider;
use crate::utils::error::Result;
use futures::future::join_all;
use std::collections::HashMap;

pub const NEAREST_LIMIT: usize = 10;

/// Fans a search out to the places provider and merges the results.
pub struct Aggregator<P: PlacesProvider> {
    provider: P,
}

impl<P: PlacesProvider> Aggregator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[cfg(test)]
    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn aggregate(&self, origin: Coordinate, categories: &[String]) -> Result<Vec<Landmark>> {
        if categories.is_empty() {
            self.nearest(origin).await
        } else {
            Ok(self.by_categories(origin, categories).await)
        }
    }

    /// 未選類別：保留供應商的距離排序，不再重新排序
    async fn nearest(&self, origin: Coordinate) -> Result<Vec<Landmark>> {
        tracing::debug!("🔎 Fetching nearest places around {}", origin);
        let mut places = self.provider.nearest(origin).await?;
        places.truncate(NEAREST_LIMIT);

        let landmarks = classify_all(&places, origin);
        tracing::info!("📍 Found {} nearby landmarks", landmarks.len());
        Ok(landmarks)
    }

    async fn by_categories(&self, origin: Coordinate, categories: &[String]) -> Vec<Landmark> {
        let mut selected: Vec<&str> = Vec::with_capacity(categories.len());
        for category in categories {
            if !selected.contains(&category.as_str()) {
                selected.push(category);
            }
        }

        tracing::debug!(
            "🔎 Fetching {} categories around {}: {:?}",
            selected.len(),
            origin,
            selected
        );

        // 同時發出所有類別請求，依選取順序取回結果
        let requests = selected
            .iter()
            .map(|category| self.provider.by_category(origin, category));
        let responses = join_all(requests).await;

        let mut found = Vec::new();
        for (category, response) in selected.iter().zip(responses) {
            match response {
                Ok(places) => {
                    tracing::debug!("📂 {}: {} places", category, places.len());
                    found.extend(normalize(&places, origin, category));
                }
                Err(e) => {
                    tracing::warn!("⚠️ Skipping category '{}': {}", category, e);
                }
            }
        }

        let mut merged = merge_by_id(found);
        merged.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));

        tracing::info!(
            "📍 Found {} landmarks across {} categories",
            merged.len(),
            selected.len()
        );
        merged
    }
}

/// Collapses landmarks sharing an id, accumulating labels in first-seen order.
pub fn merge_by_id(landmarks: Vec<Landmark>) -> Vec<Landmark> {
    let mut merged: Vec<Landmark> = Vec::with_capacity(landmarks.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for landmark in landmarks {
        match positions.get(&landmark.id) {
            Some(&pos) => merged[pos].merge_category(&landmark.category),
            None => {
                positions.insert(landmark.id.clone(), merged.len());
                merged.push(landmark);
            }
        }
    }

    merged
}
