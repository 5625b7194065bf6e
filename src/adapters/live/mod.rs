//! Live adapters for real external interactions.

pub mod entropy;

pub use entropy::LiveEntropy;
