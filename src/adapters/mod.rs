// Adapters layer: concrete implementations for external systems.

pub mod google;

pub use google::GoogleMapsClient;
