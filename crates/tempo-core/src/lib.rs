//! Tempo Core - Foundational types for the Tempo game loop
//!
//! This crate provides the types every other Tempo crate depends on:
//! - `TempoError` / `Result` - Error taxonomy and result alias
//! - `TransitionData` - Payload handed from a retiring state to the next one

mod data;
mod error;

pub use data::TransitionData;
pub use error::{Result, TempoError};
