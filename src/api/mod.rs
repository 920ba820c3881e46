//! API Module
//!
//! HTTP client for PokeAPI. Every request is a GET and goes through the
//! shared response cache, keyed by the request URL.
//!
//! # Endpoints used
//! - `GET /location-area` - Paginated list of location areas
//! - `GET /location-area/{name}` - A single area and its encounters
//! - `GET /pokemon/{name}` - A single Pokemon

pub mod client;

pub use client::PokeApiClient;
