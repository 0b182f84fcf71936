//! Crate-level tests of the turn loop.
//!
//! - `scenarios.rs`: End-to-end games exercising each ant and bee rule
//! - `determinism.rs`: Same seed and commands give the same game
//! - `properties.rs`: Property tests of health, doubling and ranges
//! - `helpers.rs`: Game setup utilities

mod helpers;
mod scenarios;

pub use helpers::*;
