//! Tabulon Core - Data model for the Tabulon table engine
//!
//! This crate provides the fundamental types that all other Tabulon crates
//! depend on:
//!
//! - `Value` - Cell primitive (null, bool, int, float, string, date, uuid)
//! - `Row` - One open-ended record of caller-supplied data
//! - `Column` - Static column descriptor with optional value derivation
//! - `TableError` - Construction-contract and ingestion errors

mod error;
mod types;

pub use error::*;
pub use types::*;
