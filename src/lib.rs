//! Pokedex - A command-line explorer for PokeAPI
//!
//! Responses are kept in an in-memory TTL cache that a background reaper
//! sweeps on a fixed interval.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
pub use tasks::ReaperHandle;
