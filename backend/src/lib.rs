//! Climate API Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
/// Read-only climate store access
pub mod climate;
pub mod config;
pub mod error;
