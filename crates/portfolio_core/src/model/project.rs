//! Project records.

use super::ExtraFields;
use serde::{Deserialize, Serialize};

/// Lifecycle state shown on a project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Deployed and publicly reachable.
    Live,
    /// Under active development. Default for newly added projects.
    #[default]
    InProgress,
    /// Idea stage, nothing built yet.
    Ideation,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::InProgress => "in-progress",
            Self::Ideation => "ideation",
        }
    }
}

/// Label/value pair shown under a project, e.g. a demo login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub label: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub value: String,
}

impl Credential {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Portfolio project entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Assigned at creation, never changed afterwards.
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub description: String,
    /// Technology tags in display order. Non-string entries are dropped on load.
    #[serde(default, deserialize_with = "super::lenient::strings")]
    pub technologies: Vec<String>,
    /// URL or embedded data reference.
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub image: String,
    /// Repository link.
    #[serde(
        default,
        deserialize_with = "super::lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub github: Option<String>,
    /// Live demo link.
    #[serde(
        default,
        deserialize_with = "super::lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
    /// Unknown status strings load as the default.
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub status: ProjectStatus,
    #[serde(
        default,
        deserialize_with = "super::lenient::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub credentials: Vec<Credential>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Project {
    /// Creates a project with empty links, no credentials and default status.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            technologies: Vec::new(),
            image: String::new(),
            github: None,
            link: None,
            status: ProjectStatus::default(),
            credentials: Vec::new(),
            extra: ExtraFields::new(),
        }
    }

    /// Merges every field present in `patch`; absent fields keep their value.
    pub fn apply(&mut self, patch: &ProjectPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(technologies) = &patch.technologies {
            self.technologies = technologies.clone();
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(github) = &patch.github {
            self.github = github.clone();
        }
        if let Some(link) = &patch.link {
            self.link = link.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(credentials) = &patch.credentials {
            self.credentials = credentials.clone();
        }
    }
}

/// Partial update for a [`Project`].
///
/// `Some(None)` on an optional link clears it; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image: Option<String>,
    pub github: Option<Option<String>>,
    pub link: Option<Option<String>>,
    pub status: Option<ProjectStatus>,
    pub credentials: Option<Vec<Credential>>,
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectPatch, ProjectStatus};

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        assert_eq!(ProjectStatus::Ideation.as_str(), "ideation");
    }

    #[test]
    fn apply_clears_link_only_when_asked() {
        let mut project = Project::new("p1", "Site");
        project.github = Some("https://github.com/a/b".to_string());
        project.link = Some("https://demo".to_string());

        project.apply(&ProjectPatch {
            link: Some(None),
            ..ProjectPatch::default()
        });

        assert_eq!(project.github.as_deref(), Some("https://github.com/a/b"));
        assert_eq!(project.link, None);
    }

    #[test]
    fn unknown_status_and_mixed_tags_load_per_field() {
        let project: Project = serde_json::from_str(
            r#"{"id":"p1","title":"Kept","status":"archived","technologies":["Rust",3,null,"Go"],"github":false}"#,
        )
        .unwrap();

        assert_eq!(project.title, "Kept");
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.technologies, vec!["Rust", "Go"]);
        assert_eq!(project.github, None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let project: Project = serde_json::from_str(r#"{"id":"p9"}"#).unwrap();
        assert_eq!(project.id, "p9");
        assert!(project.technologies.is_empty());
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert!(project.extra.is_empty());
    }
}
