// src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

// Re-export specific items for convenience if needed
pub use error::ClientError;
pub use state::Board;
