//! Certification records.

use super::ExtraFields;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    /// Assigned at creation, never changed afterwards.
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub issuer: String,
    /// Issue date as entered, usually `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub date: String,
    #[serde(
        default,
        deserialize_with = "super::lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub credential_link: Option<String>,
    /// Image or document reference.
    #[serde(
        default,
        deserialize_with = "super::lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Certification {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        issuer: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            issuer: issuer.into(),
            date: date.into(),
            credential_link: None,
            image: None,
            extra: ExtraFields::new(),
        }
    }

    pub fn apply(&mut self, patch: &CertificationPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(issuer) = &patch.issuer {
            self.issuer = issuer.clone();
        }
        if let Some(date) = &patch.date {
            self.date = date.clone();
        }
        if let Some(credential_link) = &patch.credential_link {
            self.credential_link = credential_link.clone();
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
    }
}

/// Partial update for a [`Certification`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificationPatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub credential_link: Option<Option<String>>,
    pub image: Option<Option<String>>,
}
