//! Adapters implementing the ports against external systems.

pub mod api;

pub use api::ApiClient;
