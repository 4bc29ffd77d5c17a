//! Carta - an in-memory restaurant menu CRUD service
//!
//! Carta keeps a restaurant menu as an ordered in-memory collection and
//! exposes it over a small JSON HTTP API:
//! - List, fetch, create, update, and delete menu items
//! - Field validation that reports every violation, not just the first
//! - Monotonic id assignment (max existing id + 1)
//! - Injectable seed data so deployments and tests own their state

pub mod api;
pub mod config;
pub mod error;
pub mod menu;
pub mod types;

pub use error::{Error, Result};
