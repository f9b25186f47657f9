//! Local gap analysis: derives gap-sourced candidates from a classified
//! pathway when the caller has none from the recommendation service.
//!
//! Three capped streams, in order: missing required (foundation/core)
//! skills, weak skills, then missing preferred (advanced/projects) skills.
//! The missing streams take their slots first and then drop skills the
//! taxonomy has no course for, so a course-less skill still uses a slot.

use crate::readiness::models::{
    ClassifiedSkill, Course, PathwayPhase, RawGapRecommendation, SkillStatus, TaxonomySkill,
};
use crate::readiness::normalize::find_taxonomy_skill;

const MAX_REQUIRED_GAPS: usize = 3;
const MAX_WEAK_GAPS: usize = 2;
const MAX_PREFERRED_GAPS: usize = 2;

pub fn derive_gap_candidates(
    role: &str,
    pathway: &[PathwayPhase],
    taxonomy: &[TaxonomySkill],
) -> Vec<RawGapRecommendation> {
    let required = skills_in(pathway, Some(true), SkillStatus::Missing)
        .take(MAX_REQUIRED_GAPS)
        .filter_map(|s| first_course(taxonomy, &s.name).map(|c| (s, c)))
        .map(|(s, course)| RawGapRecommendation {
            skill: s.name.clone(),
            reason: Some(format!("Critical skill gap - {} is required for {role}", s.name)),
            courses: vec![course],
        });

    // Courses are left to the aggregator's taxonomy fallback.
    let weak = skills_in(pathway, None, SkillStatus::Weak)
        .take(MAX_WEAK_GAPS)
        .map(|s| RawGapRecommendation {
            skill: s.name.clone(),
            reason: Some(format!(
                "Strengthen existing knowledge (current: {:.0}%)",
                s.confidence.unwrap_or(0.0) * 100.0
            )),
            courses: Vec::new(),
        });

    let preferred = skills_in(pathway, Some(false), SkillStatus::Missing)
        .take(MAX_PREFERRED_GAPS)
        .filter_map(|s| first_course(taxonomy, &s.name).map(|c| (s, c)))
        .map(|(s, course)| RawGapRecommendation {
            skill: s.name.clone(),
            reason: Some("Preferred skill for role advancement".to_string()),
            courses: vec![course],
        });

    required.chain(weak).chain(preferred).collect()
}

/// Pathway skills with `status`, restricted to required (`Some(true)`),
/// preferred (`Some(false)`) or all (`None`) phases.
fn skills_in(
    pathway: &[PathwayPhase],
    required: Option<bool>,
    status: SkillStatus,
) -> impl Iterator<Item = &ClassifiedSkill> {
    pathway
        .iter()
        .filter(move |p| required.map_or(true, |r| p.phase.is_required() == r))
        .flat_map(|p| p.skills.iter())
        .filter(move |s| s.status == status)
}

fn first_course(taxonomy: &[TaxonomySkill], name: &str) -> Option<Course> {
    find_taxonomy_skill(taxonomy, name)?.courses.first().cloned()
}
