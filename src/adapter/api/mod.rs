//! HTTP adapter for the platform's JSON envelope API.

mod client;
mod dto;

pub use client::ApiClient;
