//! Shared fixtures and assertions for the integration tests

pub mod declaration_assertions;
pub mod source_fixtures;
