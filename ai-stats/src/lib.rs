//! Core client crate for the AI Stats Rust SDK.

pub mod client;
pub mod error;
pub mod models;
pub mod smoke;

#[cfg(test)]
mod test_support;

pub use ai_stats_types as types;

pub use client::{Client, ClientBuilder, Configuration, HttpOptions, DEFAULT_BASE_PATH};
pub use error::{Error, Result};
pub use models::{HttpModelsApi, ModelsApi};
