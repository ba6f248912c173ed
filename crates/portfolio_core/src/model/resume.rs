//! Resume download links.

use serde::{Deserialize, Serialize};

/// Singleton record holding the two downloadable resumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeLinks {
    /// URL or embedded document reference.
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub general: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub specialized: String,
}

impl ResumeLinks {
    pub fn new(general: impl Into<String>, specialized: impl Into<String>) -> Self {
        Self {
            general: general.into(),
            specialized: specialized.into(),
        }
    }

    pub fn apply(&mut self, patch: &ResumeLinksPatch) {
        if let Some(general) = &patch.general {
            self.general = general.clone();
        }
        if let Some(specialized) = &patch.specialized {
            self.specialized = specialized.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeLinksPatch {
    pub general: Option<String>,
    pub specialized: Option<String>,
}
