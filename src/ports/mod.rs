//! Port traits defining external boundaries.
//!
//! The only boundary the generator crosses is the random source.
//! Implementations live in `src/adapters/`.

pub mod entropy;

pub use entropy::{EntropySource, UUID_BYTES};
