// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Glint crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`fixtures`] - Deterministic color tables and row keys

pub mod config;
pub mod fixtures;

pub use config::InMemoryConfigStore;
pub use fixtures::{row_key, sample_row, sample_table, TableBuilder};
