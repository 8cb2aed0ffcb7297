//! HTTP networking module
//!
//! Provides HTTP client functionality for making requests to catalog services.

mod client;

pub use client::HttpClient;
