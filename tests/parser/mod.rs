//! Parser layer tests
//!
//! Lossless round-trips and recovery on real-world shaped sources.

pub mod tests_lossless;
