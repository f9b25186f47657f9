#![allow(dead_code)]

//! Status Classifier: maps each taxonomy skill to complete / weak / missing.
//!
//! Lookup is by exact skill identity against the highest-confidence observation.
//! Evidence is returned unbounded; truncation for display is the caller's job.

use tracing::debug;

use crate::readiness::models::{
    ClassifiedSkill, PathwayPhase, Phase, SkillObservation, SkillStatus, TaxonomySkill,
    COMPLETENESS_THRESHOLD,
};
use crate::readiness::normalize::{dedup_last_wins, ObservationIndex};

/// Classifies every taxonomy skill against the user's observations.
/// Output order follows `taxonomy_skills`.
pub fn classify(
    observations: &[SkillObservation],
    taxonomy_skills: &[TaxonomySkill],
) -> Vec<ClassifiedSkill> {
    let index = ObservationIndex::build(observations);
    classify_with_index(&index, taxonomy_skills)
}

pub fn classify_with_index(
    index: &ObservationIndex,
    taxonomy_skills: &[TaxonomySkill],
) -> Vec<ClassifiedSkill> {
    taxonomy_skills
        .iter()
        .map(|skill| classify_one(index, skill))
        .collect()
}

fn classify_one(index: &ObservationIndex, skill: &TaxonomySkill) -> ClassifiedSkill {
    let (status, confidence, evidence) = match index.get(&skill.name) {
        None => (SkillStatus::Missing, None, Vec::new()),
        Some(observed) => (
            status_for(observed.confidence),
            Some(observed.confidence),
            observed.evidence.clone(),
        ),
    };
    let courses = match status {
        SkillStatus::Complete => Vec::new(),
        SkillStatus::Weak | SkillStatus::Missing => skill.courses.clone(),
    };

    ClassifiedSkill {
        name: skill.name.clone(),
        status,
        confidence,
        evidence,
        courses,
    }
}

/// Threshold is inclusive on the complete side.
pub fn status_for(confidence: f64) -> SkillStatus {
    if confidence >= COMPLETENESS_THRESHOLD {
        SkillStatus::Complete
    } else {
        SkillStatus::Weak
    }
}

/// Groups classified skills into the four phases in pathway order.
///
/// Every phase is present, even when the taxonomy has no skills for it.
/// Duplicate skill names inside one phase collapse to the last definition.
pub fn build_pathway(index: &ObservationIndex, taxonomy: &[TaxonomySkill]) -> Vec<PathwayPhase> {
    Phase::ALL
        .iter()
        .map(|&phase| {
            let in_phase: Vec<TaxonomySkill> = taxonomy
                .iter()
                .filter(|s| s.phase == phase)
                .cloned()
                .collect();
            let skills = classify_with_index(index, &dedup_last_wins(&in_phase));
            debug!("Phase {}: {} skill(s) classified", phase.as_str(), skills.len());
            PathwayPhase { phase, skills }
        })
        .collect()
}
