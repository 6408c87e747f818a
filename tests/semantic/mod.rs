//! Semantic layer tests
//!
//! - Type classification through declarations
//! - Declaration collection, ordering and `#if` branches
//! - Non-ASCII text and nested comments
//! - Source tree staleness
//! - Source locations and extraction

pub mod tests_collection;
pub mod tests_entity_type;
pub mod tests_location;
pub mod tests_source_text;
pub mod tests_source_tree;
