//! Domain types and validation for the Owly studio backend.
//!
//! This crate is I/O-free: it holds the error taxonomy, shared ID/timestamp
//! aliases, the adjacency-list-to-tree materialization used by the category
//! API, and the validation rules for conversation logs and studio entries.

pub mod error;
pub mod logs;
pub mod studio;
pub mod tree;
pub mod types;
