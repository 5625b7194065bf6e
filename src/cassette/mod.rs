//! Cassette format for recording and replaying entropy draws.

pub mod format;
pub mod recorder;
pub mod replayer;
