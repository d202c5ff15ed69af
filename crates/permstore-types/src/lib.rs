//! Shared types, adapter traits, and core utilities for permstore.
//!
//! This crate contains the value types and the adapter contract that are
//! shared between the callers of the permission store and all adapter
//! implementations. Database-backed adapters live in their own crates and
//! depend only on this one.

pub mod authz;
pub mod config;
pub mod deadline;
pub mod error;
pub mod memory;
pub mod perm_adapter;
pub mod prelude;
pub mod types;

// vim: ts=4
