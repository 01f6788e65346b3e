//! Record types for the AquaForge pond monitoring workspace.
//!
//! These are the entities the storage layer loads and hands to the metrics core.
//! Nothing in this crate computes anything; see `aquaforge-core` for that.

pub mod feed;
pub mod file_formats;
pub mod metric;
pub mod mortality;
pub mod pond;
pub mod sampling;
pub mod water_quality;
