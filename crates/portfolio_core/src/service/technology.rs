//! New-technology detection for project edits.
//!
//! # Invariants
//! - Matching against skill names is case-insensitive.
//! - Detected candidates keep the first submitted spelling and order.

use crate::model::skill::{clamp_proficiency, Skill, SkillCategory};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Proficiency prefilled for a candidate skill.
pub const DEFAULT_CANDIDATE_PROFICIENCY: u8 = 50;

/// Trims tags, collapses inner whitespace and drops empty entries.
pub fn clean_technologies<I, T>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| WHITESPACE_RE.replace_all(tag.as_ref().trim(), " ").into_owned())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Returns the tags that have no skill of the same name.
///
/// Comparison ignores case, both against `skills` and among the tags
/// themselves, so `["Docker", "docker"]` yields one candidate.
pub fn detect_new_technologies<T: AsRef<str>>(skills: &[Skill], technologies: &[T]) -> Vec<String> {
    let mut seen: HashSet<String> = skills
        .iter()
        .map(|skill| skill.name.to_lowercase())
        .collect();

    technologies
        .iter()
        .map(<T as AsRef<str>>::as_ref)
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// A detected technology awaiting the admin's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCandidate {
    pub name: String,
    pub proficiency: u8,
    pub category: SkillCategory,
    /// Used when `category` is `other`; ignored when blank.
    pub custom_category: String,
    pub skip: bool,
}

impl SkillCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            proficiency: DEFAULT_CANDIDATE_PROFICIENCY,
            category: SkillCategory::other(),
            custom_category: String::new(),
            skip: false,
        }
    }

    /// Sets proficiency from raw form input, clamped into range.
    pub fn set_proficiency(&mut self, raw: i64) {
        self.proficiency = clamp_proficiency(raw);
    }

    /// Category the committed skill will carry.
    pub fn resolved_category(&self) -> SkillCategory {
        if self.category == SkillCategory::other() {
            let custom = normalize_category(&self.custom_category);
            if !custom.is_empty() {
                return SkillCategory::from(custom);
            }
        }
        self.category.clone()
    }

    pub fn to_skill(&self) -> Skill {
        Skill::new(self.name.clone(), self.proficiency, self.resolved_category())
    }
}

/// Prefilled candidates for every new technology.
pub fn candidates_for(skills: &[Skill], technologies: &[String]) -> Vec<SkillCandidate> {
    detect_new_technologies(skills, technologies)
        .into_iter()
        .map(SkillCandidate::new)
        .collect()
}

/// Skills to commit, skipping candidates the admin declined.
pub fn resolve_candidates(candidates: &[SkillCandidate]) -> Vec<Skill> {
    candidates
        .iter()
        .filter(|candidate| !candidate.skip)
        .map(SkillCandidate::to_skill)
        .collect()
}

/// Lowercases and trims a free-form category, collapsing inner whitespace.
pub fn normalize_category(raw: &str) -> String {
    WHITESPACE_RE
        .replace_all(raw.trim(), " ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{clean_technologies, normalize_category};

    #[test]
    fn clean_technologies_drops_blank_tags() {
        let cleaned = clean_technologies(["  React ", "", "   ", "Tailwind   CSS"]);
        assert_eq!(cleaned, vec!["React", "Tailwind CSS"]);
    }

    #[test]
    fn normalize_category_lowercases_and_trims() {
        assert_eq!(normalize_category("  Cloud  Native "), "cloud native");
        assert_eq!(normalize_category("   "), "");
    }
}
