use crate::core::{classifier::classify, distance::distance};
use crate::domain::model::{Coordinate, Landmark, RawPlace};

pub const UNKNOWN_NAME: &str = "Unknown";

/// Normalizes places found under a known category; the label is not re-derived.
pub fn normalize(places: &[RawPlace], origin: Coordinate, category: &str) -> Vec<Landmark> {
    places
        .iter()
        .enumerate()
        .map(|(index, place)| to_landmark(place, index, origin, category.to_string()))
        .collect()
}

/// Normalizes unfiltered results, labelling each place with the classifier.
pub fn classify_all(places: &[RawPlace], origin: Coordinate) -> Vec<Landmark> {
    places
        .iter()
        .enumerate()
        .map(|(index, place)| to_landmark(place, index, origin, classify(place)))
        .collect()
}

fn to_landmark(place: &RawPlace, index: usize, origin: Coordinate, category: String) -> Landmark {
    let coordinate = place.coordinate();

    // 座標缺漏或非有限值時距離為 0，避免 NaN 進入排序
    let distance_miles = match coordinate {
        Some(c) if c.is_finite() && origin.is_finite() => distance(origin, c),
        _ => 0.0,
    };
    let Coordinate { lat, lng } = coordinate.unwrap_or(Coordinate::new(0.0, 0.0));

    Landmark {
        id: place
            .place_id
            .clone()
            .unwrap_or_else(|| index.to_string()),
        name: place
            .name
            .clone()
            .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        category,
        distance_miles,
        lat,
        lng,
    }
}
