//! Skill records.
//!
//! # Invariants
//! - `name` is the natural key. The store does not enforce uniqueness; lookups
//!   match it case-sensitively.
//! - `proficiency` is expected in `0..=100`; callers clamp with
//!   [`clamp_proficiency`] at the editing boundary.

use super::ExtraFields;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const MIN_PROFICIENCY: u8 = 0;
pub const MAX_PROFICIENCY: u8 = 100;

/// Clamps raw form input into the proficiency range.
pub fn clamp_proficiency(value: i64) -> u8 {
    value.clamp(i64::from(MIN_PROFICIENCY), i64::from(MAX_PROFICIENCY)) as u8
}

/// Skill grouping used by the skills section.
///
/// Serialized as a bare string. Any value outside the fixed set round-trips
/// as [`SkillCategory::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Languages,
    Tools,
    Custom(String),
}

impl SkillCategory {
    /// Category assigned to skills nobody has classified yet.
    pub fn other() -> Self {
        Self::Custom("other".to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Languages => "languages",
            Self::Tools => "tools",
            Self::Custom(value) => value.as_str(),
        }
    }
}

impl Default for SkillCategory {
    fn default() -> Self {
        Self::other()
    }
}

impl From<String> for SkillCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "frontend" => Self::Frontend,
            "backend" => Self::Backend,
            "languages" => Self::Languages,
            "tools" => Self::Tools,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for SkillCategory {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SkillCategory> for String {
    fn from(value: SkillCategory) -> Self {
        match value {
            SkillCategory::Custom(value) => value,
            fixed => fixed.as_str().to_string(),
        }
    }
}

impl Display for SkillCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub name: String,
    /// Fractional or out-of-range values load rounded and clamped.
    #[serde(default, deserialize_with = "super::lenient::proficiency")]
    pub proficiency: u8,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub category: SkillCategory,
    /// Icon name from the icon set used by the skills section.
    #[serde(
        default,
        deserialize_with = "super::lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Skill {
    pub fn new(name: impl Into<String>, proficiency: u8, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            proficiency,
            category,
            icon: None,
            extra: ExtraFields::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn apply(&mut self, patch: &SkillPatch) {
        if let Some(proficiency) = patch.proficiency {
            self.proficiency = proficiency;
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(icon) = &patch.icon {
            self.icon = icon.clone();
        }
    }
}

/// Partial update for a [`Skill`]. Renaming is delete + add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPatch {
    pub proficiency: Option<u8>,
    pub category: Option<SkillCategory>,
    pub icon: Option<Option<String>>,
}
