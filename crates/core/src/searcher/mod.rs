//! Release index search abstraction.
//!
//! This module provides a `SearchClient` trait for querying a release index
//! by title plus year or season/episode, and a DMM-compatible HTTP backend.

mod dmm;
mod types;

pub use dmm::DmmSearchClient;
pub use types::*;
