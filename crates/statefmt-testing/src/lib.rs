//! Testing infrastructure for statefmt tests.
//!
//! This crate provides utilities for writing readable rendering tests:
//! - `fixtures`: Fluent builders for state trees and schema sets
//! - `color`: A colorizer that strips markup, for comparing plain text
//! - `assertions`: Structural checks on rendered state text
//! - `world`: Temp-dir environment for running the `statefmt` binary

pub mod assertions;
pub mod color;
pub mod fixtures;
pub mod world;

pub use color::StripMarkup;
pub use fixtures::{DEFAULT_PROVIDER, SchemasBuilder, StateBuilder};
pub use world::TestWorld;
