#![allow(dead_code)]

//! Role Fit Ranker: "roles you're closest to".
//!
//! Presence alone counts toward a match here, unlike the completeness
//! threshold used for readiness. Ordering: fit_score desc, then
//! total_required desc, then role name asc so input order never leaks through.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::readiness::models::{CandidateRole, RoleFit, SkillObservation};
use crate::readiness::normalize::{skill_key, ObservationIndex};

/// Ranks every candidate role except `target_role` by overlap with the observations.
pub fn rank_roles(
    observations: &[SkillObservation],
    candidates: &[CandidateRole],
    target_role: Option<&str>,
) -> Vec<RoleFit> {
    let index = ObservationIndex::build(observations);
    rank_roles_with_index(&index, candidates, target_role)
}

pub fn rank_roles_with_index(
    index: &ObservationIndex,
    candidates: &[CandidateRole],
    target_role: Option<&str>,
) -> Vec<RoleFit> {
    let excluded = target_role.map(skill_key);

    let mut fits: Vec<RoleFit> = candidates
        .iter()
        .filter(|c| excluded.as_deref() != Some(skill_key(&c.role).as_str()))
        .filter_map(|c| fit_for(index, c))
        .collect();

    fits.sort_by(compare_fits);
    debug!("Ranked {} alternative role(s)", fits.len());
    fits
}

fn fit_for(index: &ObservationIndex, candidate: &CandidateRole) -> Option<RoleFit> {
    let required: HashSet<String> = candidate
        .foundation_and_core_skills
        .iter()
        .map(|s| skill_key(s))
        .filter(|k| !k.is_empty())
        .collect();

    // Zero required skills: fit is undefined, so the role is left out.
    if required.is_empty() {
        return None;
    }

    let matched_required = required.iter().filter(|k| index.contains(k)).count();
    let total_required = required.len();
    let fit_score =
        (100.0 * matched_required as f64 / total_required as f64).clamp(0.0, 100.0);

    Some(RoleFit {
        role: candidate.role.clone(),
        fit_score,
        matched_required,
        total_required,
    })
}

fn compare_fits(a: &RoleFit, b: &RoleFit) -> Ordering {
    b.fit_score
        .total_cmp(&a.fit_score)
        .then_with(|| b.total_required.cmp(&a.total_required))
        .then_with(|| a.role.cmp(&b.role))
}
