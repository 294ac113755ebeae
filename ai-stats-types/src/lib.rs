//! Shared types for the AI Stats Rust SDK.

pub mod error;
pub mod health;
pub mod models;
