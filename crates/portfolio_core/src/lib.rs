//! Core content store for the portfolio site.
//! This crate owns the editable collections, their persistence and the admin
//! workflows that modify them.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::certification::{Certification, CertificationPatch};
pub use model::profile::{Education, Profile, SocialLink};
pub use model::project::{Credential, Project, ProjectPatch, ProjectStatus};
pub use model::resume::{ResumeLinks, ResumeLinksPatch};
pub use model::skill::{clamp_proficiency, Skill, SkillCategory, SkillPatch};
pub use repo::blob_repo::{BlobStore, RepoError, RepoResult, SqliteBlobStore};
pub use seed::SeedData;
pub use service::portfolio_service::{
    CertificationDraft, EditPlan, EditSummary, PortfolioService, ProjectDraft, ProjectSubmission,
    ServiceError, SkillDraft,
};
pub use service::technology::{detect_new_technologies, SkillCandidate};
pub use store::{
    CollectionKind, ContentStore, HydrationReport, HydrationSource, MutationOutcome,
    SubscriptionId,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
