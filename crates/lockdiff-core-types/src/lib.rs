//! Core types shared across lockdiff facilities
//!
//! Canonical field keys and event names used by both the error facility
//! and the logging facility, so that every crate emits the same schema.

pub mod schema;
