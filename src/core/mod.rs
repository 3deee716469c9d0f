//! Core domain types - AQI severity bands and the city roster

pub mod aqi;
pub mod cities;

pub use aqi::AqiBand;
pub use cities::CITIES;
