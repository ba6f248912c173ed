//! Admin use-case services.
//!
//! # Responsibility
//! - Detect technologies a project uses that the skills list lacks.
//! - Orchestrate the add/edit forms on top of [`crate::store::ContentStore`].
//!
//! # Invariants
//! - Services never bypass the store; every change goes through its mutators.

pub mod portfolio_service;
pub mod technology;
