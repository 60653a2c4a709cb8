//! Builds the static catalogs (market groups, types, regions) served by the
//! store from line-delimited JSON dumps of the game's static data.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;

// Record types and dump parsing
pub mod domain;
pub mod dump;

pub use error::{Result, StaticStoreError};
