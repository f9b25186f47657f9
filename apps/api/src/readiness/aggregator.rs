//! Recommendation Aggregator: merges gap-sourced and confidence-sourced
//! candidates into one list with at most one entry per skill identity.
//!
//! Gap candidates come first and win on collision: externally vetted gap
//! analysis is never shadowed by the local weak-skill heuristic.

use std::collections::HashSet;

use tracing::debug;

use crate::readiness::models::{
    ClassifiedSkill, Course, RawGapRecommendation, Recommendation, RecommendationSource, SkillStatus,
    TaxonomySkill,
};
use crate::readiness::normalize::{find_taxonomy_skill, skill_key, ObservationIndex};

/// Builds the merged, deduplicated recommendation list.
///
/// `weak_skills` may contain classified skills of any status; only `weak`
/// ones with a taxonomy entry become candidates. Confidence always comes from
/// `index` (the user's current observations), never from the source record.
pub fn aggregate(
    gap_recs: &[RawGapRecommendation],
    weak_skills: &[ClassifiedSkill],
    taxonomy: &[TaxonomySkill],
    index: &ObservationIndex,
) -> Vec<Recommendation> {
    let gap_candidates = gap_recs.iter().map(|rec| Recommendation {
        skill: rec.skill.clone(),
        confidence: None,
        courses: if rec.courses.is_empty() {
            taxonomy_courses(taxonomy, &rec.skill)
        } else {
            rec.courses.clone()
        },
        source: RecommendationSource::Gap,
        reason: rec.reason.clone(),
    });

    let confidence_candidates = weak_skills
        .iter()
        .filter(|s| s.status == SkillStatus::Weak)
        .filter_map(|s| {
            let entry = find_taxonomy_skill(taxonomy, &s.name)?;
            Some(Recommendation {
                skill: s.name.clone(),
                confidence: None,
                courses: entry.courses.clone(),
                source: RecommendationSource::Confidence,
                reason: None,
            })
        });

    let merged: Vec<Recommendation> = gap_candidates.chain(confidence_candidates).collect();
    let candidate_count = merged.len();

    let mut recommendations = dedup_candidates(merged);
    for rec in &mut recommendations {
        rec.confidence = index.confidence(&rec.skill);
    }

    debug!(
        "Aggregated {} candidate(s) into {} recommendation(s)",
        candidate_count,
        recommendations.len()
    );
    recommendations
}

/// Keeps the first candidate per case-insensitive skill identity.
/// Idempotent: deduplicating an already deduplicated list is a no-op.
pub fn dedup_candidates(candidates: Vec<Recommendation>) -> Vec<Recommendation> {
    let mut seen: HashSet<String> = HashSet::new();
    candidates
        .into_iter()
        .filter(|rec| seen.insert(skill_key(&rec.skill)))
        .collect()
}

fn taxonomy_courses(taxonomy: &[TaxonomySkill], name: &str) -> Vec<Course> {
    find_taxonomy_skill(taxonomy, name)
        .map(|t| t.courses.clone())
        .unwrap_or_default()
}
