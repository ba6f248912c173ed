//! Blob persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the string-keyed durable storage used by the content store.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - A write replaces the whole value stored under its key.
//! - `write_many` is all-or-nothing.

pub mod blob_repo;
