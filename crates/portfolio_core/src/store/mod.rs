//! In-memory content store mirrored to durable blob storage.
//!
//! # Responsibility
//! - Hold the authoritative copy of projects, certifications, skills and
//!   resume links for the session.
//! - Write the whole affected collection back after every change.
//!
//! # Invariants
//! - Collections hydrate independently; a corrupt blob only resets its own
//!   collection to the seed.
//! - Storage failures never surface as errors. They are logged and reported
//!   through [`MutationOutcome::persisted`].

pub mod content_store;

pub use content_store::{
    CollectionKind, ContentStore, HydrationReport, HydrationSource, MutationOutcome,
    SubscriptionId,
};
