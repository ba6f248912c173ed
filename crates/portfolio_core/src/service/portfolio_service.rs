//! Admin form workflows over the content store.
//!
//! # Responsibility
//! - Turn add/edit form input into store records, assigning identifiers.
//! - Run the "new technology" review step of project edits.
//!
//! # Invariants
//! - Required-field checks happen here; the store accepts any shape.
//! - A reviewed project edit and its accepted skills persist in one write.

use crate::model::certification::Certification;
use crate::model::project::{Credential, Project, ProjectPatch, ProjectStatus};
use crate::model::skill::{clamp_proficiency, Skill, SkillCategory};
use crate::repo::blob_repo::BlobStore;
use crate::service::technology::{
    candidates_for, clean_technologies, normalize_category, resolve_candidates, SkillCandidate,
};
use crate::store::{ContentStore, MutationOutcome};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Image used when a project is submitted without one.
pub const PLACEHOLDER_PROJECT_IMAGE: &str = "/projects/placeholder.png";

/// Form-level error for admin workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required form field was blank.
    MissingField(&'static str),
    /// The edited project does not exist.
    ProjectNotFound(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is empty: {field}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
        }
    }
}

impl Error for ServiceError {}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Add-project form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Empty means "use the placeholder image".
    pub image: String,
    pub github: String,
    pub link: String,
    pub status: ProjectStatus,
    pub credentials: Vec<Credential>,
}

/// Add-certification form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificationDraft {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_link: String,
    pub image: String,
}

/// Add-skill form input. `proficiency` is raw and gets clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: String,
    pub proficiency: i64,
    pub category: SkillCategory,
    pub custom_category: String,
    pub icon: String,
}

impl Default for SkillDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            proficiency: 50,
            category: SkillCategory::Frontend,
            custom_category: String::new(),
            icon: String::new(),
        }
    }
}

/// Result of submitting a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSubmission {
    pub id: String,
    pub outcome: MutationOutcome,
    /// Technologies the skills list does not know yet.
    pub candidates: Vec<SkillCandidate>,
}

/// Next step of a project edit.
#[derive(Debug, Clone, PartialEq)]
pub enum EditPlan {
    /// No new technologies; commit with an empty candidate list.
    Ready { patch: ProjectPatch },
    /// The admin has to review these candidates first.
    NeedsSkills {
        patch: ProjectPatch,
        candidates: Vec<SkillCandidate>,
    },
}

/// Summary of a committed project edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSummary {
    pub outcome: MutationOutcome,
    pub added: usize,
    pub skipped: usize,
}

impl EditSummary {
    /// Human-readable confirmation, e.g. `Project updated, 2 skill(s) added, 1 skipped`.
    pub fn message(&self) -> String {
        let mut parts = vec!["Project updated".to_string()];
        if self.added > 0 {
            parts.push(format!("{} skill(s) added", self.added));
        }
        if self.skipped > 0 {
            parts.push(format!("{} skipped", self.skipped));
        }
        parts.join(", ")
    }
}

/// Admin workflow facade owning the store.
pub struct PortfolioService<S: BlobStore> {
    store: ContentStore<S>,
}

impl<S: BlobStore> PortfolioService<S> {
    pub fn new(store: ContentStore<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ContentStore<S> {
        &self.store
    }

    /// Validates and appends a new project with a fresh `project-<uuid>` id.
    pub fn submit_project(&mut self, draft: ProjectDraft) -> ServiceResult<ProjectSubmission> {
        let title = required(&draft.title, "title")?;

        let id = format!("project-{}", Uuid::new_v4());
        let mut project = Project::new(id.clone(), title);
        project.description = draft.description.trim().to_string();
        project.technologies = clean_technologies(&draft.technologies);
        project.image = optional(&draft.image).unwrap_or_else(|| PLACEHOLDER_PROJECT_IMAGE.to_string());
        project.github = optional(&draft.github);
        project.link = optional(&draft.link);
        project.status = draft.status;
        project.credentials = clean_credentials(draft.credentials);

        let candidates = candidates_for(self.store.skills(), &project.technologies);
        let outcome = self.store.add_project(project);
        info!(
            "event=project_submit module=service status=ok candidates={} persisted={}",
            candidates.len(),
            outcome.persisted
        );

        Ok(ProjectSubmission {
            id,
            outcome,
            candidates,
        })
    }

    /// Commits the accepted candidates from a submission or review step.
    pub fn add_discovered_skills(&mut self, candidates: &[SkillCandidate]) -> MutationOutcome {
        self.store.add_skills(resolve_candidates(candidates))
    }

    pub fn submit_certification(
        &mut self,
        draft: CertificationDraft,
    ) -> ServiceResult<(String, MutationOutcome)> {
        let name = required(&draft.name, "name")?;
        let issuer = required(&draft.issuer, "issuer")?;
        let date = required(&draft.date, "date")?;

        let id = format!("cert-{}", Uuid::new_v4());
        let mut certification = Certification::new(id.clone(), name, issuer, date);
        certification.credential_link = optional(&draft.credential_link);
        certification.image = optional(&draft.image);

        let outcome = self.store.add_certification(certification);
        Ok((id, outcome))
    }

    pub fn submit_skill(&mut self, draft: SkillDraft) -> ServiceResult<MutationOutcome> {
        let name = required(&draft.name, "name")?;

        let custom = normalize_category(&draft.custom_category);
        let category = if draft.category == SkillCategory::other() && !custom.is_empty() {
            SkillCategory::from(custom)
        } else {
            draft.category
        };

        let mut skill = Skill::new(name, clamp_proficiency(draft.proficiency), category);
        skill.icon = optional(&draft.icon);
        Ok(self.store.add_skill(skill))
    }

    /// Cleans the edit's technology list and checks it against known skills.
    pub fn begin_project_edit(&self, id: &str, mut patch: ProjectPatch) -> ServiceResult<EditPlan> {
        if self.store.project(id).is_none() {
            return Err(ServiceError::ProjectNotFound(id.to_string()));
        }

        let Some(technologies) = patch.technologies.take() else {
            return Ok(EditPlan::Ready { patch });
        };
        let technologies = clean_technologies(&technologies);
        let candidates = candidates_for(self.store.skills(), &technologies);
        patch.technologies = Some(technologies);

        if candidates.is_empty() {
            Ok(EditPlan::Ready { patch })
        } else {
            Ok(EditPlan::NeedsSkills { patch, candidates })
        }
    }

    /// Saves the edit and every non-skipped candidate in one write.
    pub fn commit_project_edit(
        &mut self,
        id: &str,
        patch: &ProjectPatch,
        candidates: &[SkillCandidate],
    ) -> EditSummary {
        let skills = resolve_candidates(candidates);
        let added = skills.len();
        let skipped = candidates.len() - added;
        let outcome = self.store.apply_project_edit(id, patch, skills);

        info!(
            "event=project_edit module=service status=ok added={added} skipped={skipped} persisted={}",
            outcome.persisted
        );
        EditSummary {
            outcome,
            added,
            skipped,
        }
    }

    /// Saves the edit and declines every detected candidate.
    pub fn skip_all_new_skills(&mut self, id: &str, patch: &ProjectPatch) -> MutationOutcome {
        self.store.update_project(id, patch)
    }
}

fn required(value: &str, field: &'static str) -> ServiceResult<String> {
    optional(value).ok_or(ServiceError::MissingField(field))
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn clean_credentials(credentials: Vec<Credential>) -> Vec<Credential> {
    credentials
        .into_iter()
        .filter(|cred| !cred.label.trim().is_empty() && !cred.value.trim().is_empty())
        .collect()
}
