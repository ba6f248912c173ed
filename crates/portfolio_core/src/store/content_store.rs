//! Content store implementation.

use crate::model::certification::{Certification, CertificationPatch};
use crate::model::profile::Profile;
use crate::model::project::{Project, ProjectPatch};
use crate::model::resume::{ResumeLinks, ResumeLinksPatch};
use crate::model::skill::{Skill, SkillPatch};
use crate::repo::blob_repo::{BlobStore, RepoError, RepoResult};
use crate::seed::SeedData;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// One independently persisted top-level collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Projects,
    Certifications,
    Skills,
    ResumeLinks,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 4] = [
        Self::Projects,
        Self::Certifications,
        Self::Skills,
        Self::ResumeLinks,
    ];

    /// Key of the blob holding this collection.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Projects => "portfolio.projects",
            Self::Certifications => "portfolio.certifications",
            Self::Skills => "portfolio.skills",
            Self::ResumeLinks => "portfolio.resume_links",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Skills => "skills",
            Self::ResumeLinks => "resume_links",
        }
    }
}

/// Where a collection's startup content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationSource {
    /// Decoded from the persisted blob.
    Persisted,
    /// No blob was stored; seed used.
    SeedMissing,
    /// Blob did not decode; seed used.
    SeedCorrupt,
    /// Backend read failed; seed used.
    SeedUnavailable,
}

impl HydrationSource {
    pub fn is_seed(self) -> bool {
        !matches!(self, Self::Persisted)
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Persisted => "persisted",
            Self::SeedMissing => "missing",
            Self::SeedCorrupt => "corrupt",
            Self::SeedUnavailable => "unavailable",
        }
    }
}

/// Per-collection hydration outcome, resolved once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrationReport {
    pub projects: HydrationSource,
    pub certifications: HydrationSource,
    pub skills: HydrationSource,
    pub resume_links: HydrationSource,
}

impl HydrationReport {
    pub fn source(&self, kind: CollectionKind) -> HydrationSource {
        match kind {
            CollectionKind::Projects => self.projects,
            CollectionKind::Certifications => self.certifications,
            CollectionKind::Skills => self.skills,
            CollectionKind::ResumeLinks => self.resume_links,
        }
    }
}

/// Result of a mutating store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Whether the in-memory collection changed. No-op updates/deletes are `false`.
    pub changed: bool,
    /// Whether the change reached durable storage. `false` for no-ops.
    pub persisted: bool,
}

impl MutationOutcome {
    const UNCHANGED: Self = Self {
        changed: false,
        persisted: false,
    };
}

/// Handle returned by [`ContentStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(CollectionKind)>;

/// Authoritative session copy of the portfolio content.
///
/// Constructed once by the application entry point and passed to consumers;
/// all mutation goes through `&mut self`.
pub struct ContentStore<S: BlobStore> {
    backend: S,
    seed: SeedData,
    projects: Vec<Project>,
    certifications: Vec<Certification>,
    skills: Vec<Skill>,
    resume_links: ResumeLinks,
    hydration: HydrationReport,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: BlobStore> ContentStore<S> {
    /// Loads every collection from `backend`, falling back to `seed` per
    /// collection when its blob is missing, corrupt or unreadable.
    pub fn open(backend: S, seed: SeedData) -> Self {
        let (projects, projects_source) =
            hydrate(&backend, CollectionKind::Projects, || seed.projects.clone());
        let (certifications, certifications_source) =
            hydrate(&backend, CollectionKind::Certifications, || {
                seed.certifications.clone()
            });
        let (skills, skills_source) =
            hydrate(&backend, CollectionKind::Skills, || seed.skills.clone());
        let (resume_links, resume_links_source) =
            hydrate(&backend, CollectionKind::ResumeLinks, || {
                seed.resume_links.clone()
            });

        let hydration = HydrationReport {
            projects: projects_source,
            certifications: certifications_source,
            skills: skills_source,
            resume_links: resume_links_source,
        };
        info!(
            "event=store_open module=store status=ok projects={} certifications={} skills={} resume_links={}",
            projects_source.as_str(),
            certifications_source.as_str(),
            skills_source.as_str(),
            resume_links_source.as_str()
        );

        Self {
            backend,
            seed,
            projects,
            certifications,
            skills,
            resume_links,
            hydration,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn hydration(&self) -> &HydrationReport {
        &self.hydration
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn resume_links(&self) -> &ResumeLinks {
        &self.resume_links
    }

    /// Read-only biography served from the seed.
    pub fn profile(&self) -> &Profile {
        &self.seed.profile
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn certification(&self, id: &str) -> Option<&Certification> {
        self.certifications.iter().find(|cert| cert.id == id)
    }

    /// Case-sensitive lookup; returns the first match.
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.name == name)
    }

    /// Registers a callback run after every changing mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(CollectionKind) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Appends without checking for duplicate ids.
    pub fn add_project(&mut self, project: Project) -> MutationOutcome {
        self.projects.push(project);
        self.commit(CollectionKind::Projects)
    }

    pub fn update_project(&mut self, id: &str, patch: &ProjectPatch) -> MutationOutcome {
        if !apply_matching(&mut self.projects, |p| p.id == id, |p| p.apply(patch)) {
            debug!("event=store_update module=store status=noop collection=projects");
            return MutationOutcome::UNCHANGED;
        }
        self.commit(CollectionKind::Projects)
    }

    pub fn delete_project(&mut self, id: &str) -> MutationOutcome {
        if !remove_matching(&mut self.projects, |p| p.id == id) {
            return MutationOutcome::UNCHANGED;
        }
        self.commit(CollectionKind::Projects)
    }

    /// Applies a project edit together with the skills discovered while
    /// editing, persisting both collections in one atomic write.
    ///
    /// An unknown `id` leaves projects untouched; `new_skills` are still added.
    pub fn apply_project_edit(
        &mut self,
        id: &str,
        patch: &ProjectPatch,
        new_skills: Vec<Skill>,
    ) -> MutationOutcome {
        let project_changed = apply_matching(&mut self.projects, |p| p.id == id, |p| p.apply(patch));
        let skills_changed = !new_skills.is_empty();
        self.skills.extend(new_skills);

        let touched: Vec<CollectionKind> = [
            (CollectionKind::Projects, project_changed),
            (CollectionKind::Skills, skills_changed),
        ]
        .into_iter()
        .filter_map(|(kind, changed)| changed.then_some(kind))
        .collect();

        if touched.is_empty() {
            return MutationOutcome::UNCHANGED;
        }

        let persisted = self.persist_all(&touched);
        for kind in touched {
            self.notify(kind);
        }
        MutationOutcome {
            changed: true,
            persisted,
        }
    }

    pub fn add_certification(&mut self, certification: Certification) -> MutationOutcome {
        self.certifications.push(certification);
        self.commit(CollectionKind::Certifications)
    }

    pub fn update_certification(&mut self, id: &str, patch: &CertificationPatch) -> MutationOutcome {
        if !apply_matching(&mut self.certifications, |c| c.id == id, |c| c.apply(patch)) {
            return MutationOutcome::UNCHANGED;
        }
        self.commit(CollectionKind::Certifications)
    }

    pub fn delete_certification(&mut self, id: &str) -> MutationOutcome {
        if !remove_matching(&mut self.certifications, |c| c.id == id) {
            return MutationOutcome::UNCHANGED;
        }
        self.commit(CollectionKind::Certifications)
    }

    /// Appends without checking for an existing skill with the same name.
    pub fn add_skill(&mut self, skill: Skill) -> MutationOutcome {
        self.skills.push(skill);
        self.commit(CollectionKind::Skills)
    }

    /// Appends all `skills` with a single write. Empty input is a no-op.
    pub fn add_skills(&mut self, skills: Vec<Skill>) -> MutationOutcome {
        if skills.is_empty() {
            return MutationOutcome::UNCHANGED;
        }
        self.skills.extend(skills);
        self.commit(CollectionKind::Skills)
    }

    /// Updates every skill named `name`.
    pub fn update_skill(&mut self, name: &str, patch: &SkillPatch) -> MutationOutcome {
        if !apply_matching(&mut self.skills, |s| s.name == name, |s| s.apply(patch)) {
            return MutationOutcome::UNCHANGED;
        }
        self.commit(CollectionKind::Skills)
    }

    /// Removes every skill named `name`.
    pub fn delete_skill(&mut self, name: &str) -> MutationOutcome {
        if !remove_matching(&mut self.skills, |s| s.name == name) {
            return MutationOutcome::UNCHANGED;
        }
        self.commit(CollectionKind::Skills)
    }

    pub fn set_resume_links(&mut self, links: ResumeLinks) -> MutationOutcome {
        self.resume_links = links;
        self.commit(CollectionKind::ResumeLinks)
    }

    pub fn update_resume_links(&mut self, patch: &ResumeLinksPatch) -> MutationOutcome {
        self.resume_links.apply(patch);
        self.commit(CollectionKind::ResumeLinks)
    }

    /// Drops the persisted blob for `kind` and restores its seed content.
    pub fn reset_collection(&mut self, kind: CollectionKind) -> MutationOutcome {
        match kind {
            CollectionKind::Projects => self.projects = self.seed.projects.clone(),
            CollectionKind::Certifications => {
                self.certifications = self.seed.certifications.clone()
            }
            CollectionKind::Skills => self.skills = self.seed.skills.clone(),
            CollectionKind::ResumeLinks => self.resume_links = self.seed.resume_links.clone(),
        }

        let persisted = match self.backend.remove(kind.storage_key()) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "event=store_reset module=store status=error key={} error={}",
                    kind.storage_key(),
                    err
                );
                false
            }
        };
        self.notify(kind);
        MutationOutcome {
            changed: true,
            persisted,
        }
    }

    fn commit(&mut self, kind: CollectionKind) -> MutationOutcome {
        let persisted = self.persist_all(&[kind]);
        self.notify(kind);
        MutationOutcome {
            changed: true,
            persisted,
        }
    }

    fn persist_all(&self, kinds: &[CollectionKind]) -> bool {
        let encoded = match kinds
            .iter()
            .map(|kind| self.encode(*kind).map(|json| (kind.storage_key(), json)))
            .collect::<RepoResult<Vec<_>>>()
        {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!("event=store_persist module=store status=error error={err}");
                return false;
            }
        };

        let result = match encoded.as_slice() {
            [(key, json)] => self.backend.write(key, json),
            entries => {
                let borrowed: Vec<(&str, &str)> = entries
                    .iter()
                    .map(|(key, json)| (*key, json.as_str()))
                    .collect();
                self.backend.write_many(&borrowed)
            }
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                let keys: Vec<&str> = encoded.iter().map(|(key, _)| *key).collect();
                warn!(
                    "event=store_persist module=store status=error keys={} error={}",
                    keys.join(","),
                    err
                );
                false
            }
        }
    }

    fn encode(&self, kind: CollectionKind) -> RepoResult<String> {
        match kind {
            CollectionKind::Projects => to_json(kind, &self.projects),
            CollectionKind::Certifications => to_json(kind, &self.certifications),
            CollectionKind::Skills => to_json(kind, &self.skills),
            CollectionKind::ResumeLinks => to_json(kind, &self.resume_links),
        }
    }

    fn notify(&mut self, kind: CollectionKind) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(kind);
        }
    }
}

fn hydrate<S, T, F>(backend: &S, kind: CollectionKind, fallback: F) -> (T, HydrationSource)
where
    S: BlobStore,
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let key = kind.storage_key();
    match backend.read(key) {
        Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
            Ok(value) => (value, HydrationSource::Persisted),
            Err(err) => {
                warn!(
                    "event=store_hydrate module=store status=fallback key={key} reason=corrupt error={err}"
                );
                (fallback(), HydrationSource::SeedCorrupt)
            }
        },
        Ok(None) => {
            debug!("event=store_hydrate module=store status=fallback key={key} reason=missing");
            (fallback(), HydrationSource::SeedMissing)
        }
        Err(err) => {
            warn!(
                "event=store_hydrate module=store status=fallback key={key} reason=unavailable error={err}"
            );
            (fallback(), HydrationSource::SeedUnavailable)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(kind: CollectionKind, value: &T) -> RepoResult<String> {
    serde_json::to_string(value).map_err(|source| RepoError::Serialization {
        key: kind.storage_key().to_string(),
        source,
    })
}

fn apply_matching<T>(
    items: &mut [T],
    matches: impl Fn(&T) -> bool,
    mut apply: impl FnMut(&mut T),
) -> bool {
    let mut found = false;
    for item in items.iter_mut().filter(|item| matches(item)) {
        apply(item);
        found = true;
    }
    found
}

fn remove_matching<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !matches(item));
    items.len() != before
}
