//! Readiness Scorer: phase-level counts and an overall percentage.
//!
//! Every skill weighs 1 regardless of phase; weak skills earn half credit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::readiness::models::{PathwayPhase, Phase, SkillStatus};

/// Credit a weak skill contributes relative to a complete one.
const WEAK_CREDIT: f64 = 0.5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseStats {
    pub total: usize,
    pub complete: usize,
    pub weak: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessScore {
    pub overall: f64, // 0 – 100
    pub per_phase: BTreeMap<Phase, PhaseStats>,
}

impl ReadinessScore {
    /// Aggregate counts across all phases.
    pub fn totals(&self) -> PhaseStats {
        self.per_phase
            .values()
            .fold(PhaseStats::default(), |mut acc, s| {
                acc.total += s.total;
                acc.complete += s.complete;
                acc.weak += s.weak;
                acc.missing += s.missing;
                acc
            })
    }
}

pub fn score(phases: &[PathwayPhase]) -> ReadinessScore {
    let mut per_phase: BTreeMap<Phase, PhaseStats> = BTreeMap::new();

    for phase in phases {
        let stats = per_phase.entry(phase.phase).or_default();
        for skill in &phase.skills {
            stats.total += 1;
            match skill.status {
                SkillStatus::Complete => stats.complete += 1,
                SkillStatus::Weak => stats.weak += 1,
                SkillStatus::Missing => stats.missing += 1,
            }
        }
    }

    let (total, earned) = per_phase.values().fold((0usize, 0.0_f64), |(t, e), s| {
        (t + s.total, e + s.complete as f64 + WEAK_CREDIT * s.weak as f64)
    });

    let overall = if total > 0 {
        (100.0 * earned / total as f64).clamp(0.0, 100.0)
    } else {
        0.0
    };

    ReadinessScore { overall, per_phase }
}
