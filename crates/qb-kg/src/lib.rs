//! # Query Builder KG Client
//!
//! HTTP client for the knowledge graph core API. Implements the provider
//! traits of `qb-core` on top of `reqwest`.

pub mod client;

pub use client::{KgClient, KgConfig, DEFAULT_API_VERSION, DEFAULT_KG_URL};
