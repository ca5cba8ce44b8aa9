//! Core library components.
//!
//! The `.kvc` document engine plus the configuration and secret-store
//! layers built on top of it.

pub mod config;
pub mod constants;
pub mod document;
pub mod store;
