//! Adapters implementing application ports over the integration crates

mod geocoding_adapter;
mod inference_adapter;
mod open_meteo_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use inference_adapter::OllamaInferenceAdapter;
pub use open_meteo_adapter::OpenMeteoAdapter;
