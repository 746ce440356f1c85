use crate::domain::model::Coordinate;

pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance in miles (haversine), rounded to two decimals.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    round_hundredths(EARTH_RADIUS_MILES * c)
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
