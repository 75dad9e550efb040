//! Unit tests for the configuration record and store.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `record`: In-memory reviewer edits and YAML format
//! - `persistence`: Loading, creating, and saving the file
//! - `mutations`: Store operations that rewrite the file
//! - `location`: Default path resolution

mod helpers;
