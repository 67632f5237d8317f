//! Skycast HTTP presentation layer
//!
//! Serves the persisted forecast report as a minimal web page.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
