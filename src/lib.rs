// Declare modules within this crate
pub mod boards;
pub mod client;
pub mod config;
pub mod errors;
pub mod factory;
pub mod models;

// Re-export the main components for users of this crate
pub use boards::BoardsApi;
pub use client::ApiClient;
pub use config::{Credentials, TrelloConfig};
pub use errors::ApiClientError;
pub use models::{Board, BoardFilter, BoardParams, BoardPrefs, DeleteResponse, QueryParams};
