#![allow(dead_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum confidence at which an observed skill counts as `complete`.
pub const COMPLETENESS_THRESHOLD: f64 = 0.7;

/// Where a skill observation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSource {
    Resume,
    Github,
    Manual,
}

impl SkillSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillSource::Resume => "resume",
            SkillSource::Github => "github",
            SkillSource::Manual => "manual",
        }
    }
}

impl fmt::Display for SkillSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `(skill, confidence, source)` observation about the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillObservation {
    pub name: String,
    pub confidence: f64, // 0.0 – 1.0
    pub source: SkillSource,
}

impl SkillObservation {
    pub fn new(name: &str, confidence: f64, source: SkillSource) -> Self {
        Self {
            name: name.to_string(),
            confidence,
            source,
        }
    }
}

/// Skill-maturity bucket. Declaration order is the pathway order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Foundation,
    Core,
    Advanced,
    Projects,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Foundation, Phase::Core, Phase::Advanced, Phase::Projects];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Foundation => "foundation",
            Phase::Core => "core",
            Phase::Advanced => "advanced",
            Phase::Projects => "projects",
        }
    }

    /// Foundation and core skills are the role's hard requirements.
    pub fn is_required(&self) -> bool {
        matches!(self, Phase::Foundation | Phase::Core)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub platform: String,
    pub title: String,
    pub url: String,
}

/// A skill the target role requires, with its learning resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomySkill {
    pub name: String,
    pub phase: Phase,
    pub courses: Vec<Course>,
}

impl TaxonomySkill {
    pub fn new(name: &str, phase: Phase) -> Self {
        Self {
            name: name.to_string(),
            phase,
            courses: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStatus {
    Complete,
    Weak,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSkill {
    pub name: String,
    pub status: SkillStatus,
    /// `None` only when no observation exists for the skill.
    pub confidence: Option<f64>,
    /// Raw observation names with their source, e.g. `"Python (resume)"`.
    pub evidence: Vec<String>,
    /// Suggested courses; always empty for complete skills.
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayPhase {
    pub phase: Phase,
    pub skills: Vec<ClassifiedSkill>,
}

/// An alternative role and the foundation+core skills it requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRole {
    pub role: String,
    pub foundation_and_core_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleFit {
    pub role: String,
    pub fit_score: f64, // 0 – 100
    pub matched_required: usize,
    pub total_required: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Gap,
    Confidence,
}

/// Candidate produced by the gap analysis, already ranked by its producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGapRecommendation {
    pub skill: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill: String,
    pub confidence: Option<f64>,
    pub courses: Vec<Course>,
    pub source: RecommendationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
