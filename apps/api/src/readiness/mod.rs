//! Skill Readiness & Recommendation engine.
//!
//! Pure functions over (observations, taxonomy): classify each required skill,
//! score readiness, rank alternative roles, and merge recommendations.
//! Nothing here awaits, retries, or persists; `evaluate` is safe to call from
//! any number of concurrent requests.

pub mod aggregator;
pub mod classifier;
pub mod gap_analysis;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod role_fit;
pub mod scorer;
pub mod validation;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::readiness::models::{
    ClassifiedSkill, PathwayPhase, Phase, RawGapRecommendation, Recommendation, RoleFit,
    SkillObservation, SkillStatus, TaxonomySkill,
};
use crate::readiness::normalize::ObservationIndex;
use crate::readiness::scorer::PhaseStats;
use crate::taxonomy::TaxonomyLookup;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessStats {
    pub skills_total: usize,
    pub skills_complete: usize,
    pub skills_weak: usize,
    pub skills_missing: usize,
    pub readiness_score: f64,
    pub per_phase: BTreeMap<Phase, PhaseStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub target_role_input: String,
    /// Canonical role name, or `None` when the role could not be resolved.
    pub target_role: Option<String>,
    pub target_sector: String,
    pub available_roles: Vec<String>,
    pub pathway: Vec<PathwayPhase>,
    pub stats: ReadinessStats,
    pub suggested_roles: Vec<RoleFit>,
    pub recommendations: Vec<Recommendation>,
}

impl ReadinessReport {
    /// Trims display-only lists. The engine itself never truncates.
    pub fn truncate_for_display(&mut self, evidence_limit: usize, suggested_roles_limit: usize) {
        for phase in &mut self.pathway {
            for skill in &mut phase.skills {
                skill.evidence.truncate(evidence_limit);
            }
        }
        self.suggested_roles.truncate(suggested_roles_limit);
    }

    /// Rounds percentages to two decimals for the wire.
    pub fn round_scores(&mut self) {
        self.stats.readiness_score = round_percent(self.stats.readiness_score);
        for fit in &mut self.suggested_roles {
            fit.fit_score = round_percent(fit.fit_score);
        }
    }
}

fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Runs the full engine for one request.
///
/// `gap_recommendations: None` means the caller has no gap analysis, so gap
/// candidates are derived locally from the pathway. `Some(&[])` means an
/// explicit empty gap stream.
pub fn evaluate(
    observations: &[SkillObservation],
    lookup: &TaxonomyLookup,
    gap_recommendations: Option<&[RawGapRecommendation]>,
) -> ReadinessReport {
    let index = ObservationIndex::build(observations);

    let target_role = lookup.resolved.as_ref().map(|r| r.role.clone());
    let taxonomy: &[TaxonomySkill] = lookup
        .resolved
        .as_ref()
        .map(|r| r.skills.as_slice())
        .unwrap_or(&[]);

    let pathway = classifier::build_pathway(&index, taxonomy);
    let score = scorer::score(&pathway);
    let totals = score.totals();

    let suggested_roles =
        role_fit::rank_roles_with_index(&index, &lookup.alternates, target_role.as_deref());

    let derived;
    let gap_recs: &[RawGapRecommendation] = match (gap_recommendations, target_role.as_deref()) {
        (Some(recs), _) => recs,
        (None, Some(role)) => {
            derived = gap_analysis::derive_gap_candidates(role, &pathway, taxonomy);
            derived.as_slice()
        }
        (None, None) => &[],
    };

    let weak_skills: Vec<ClassifiedSkill> = pathway
        .iter()
        .flat_map(|p| p.skills.iter())
        .filter(|s| s.status == SkillStatus::Weak)
        .cloned()
        .collect();
    let recommendations = aggregator::aggregate(gap_recs, &weak_skills, taxonomy, &index);

    debug!(
        "Evaluated '{}' -> {:?}: readiness {:.2}, {} recommendation(s)",
        lookup.target_role_input,
        target_role,
        score.overall,
        recommendations.len()
    );

    ReadinessReport {
        target_role_input: lookup.target_role_input.clone(),
        target_role,
        target_sector: lookup.target_sector.clone(),
        available_roles: lookup.available_roles.clone(),
        pathway,
        stats: ReadinessStats {
            skills_total: totals.total,
            skills_complete: totals.complete,
            skills_weak: totals.weak,
            skills_missing: totals.missing,
            readiness_score: score.overall,
            per_phase: score.per_phase,
        },
        suggested_roles,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::models::{RecommendationSource, SkillSource};
    use crate::taxonomy::TaxonomyCatalog;

    const CATALOG: &str = r#"{
        "roles": [
            {
                "role": "software engineer",
                "phases": {
                    "foundation": ["python", "git"],
                    "core": ["docker", "kubernetes"],
                    "advanced": ["system design"],
                    "projects": []
                }
            },
            {
                "role": "devops engineer",
                "phases": { "foundation": ["linux", "git"], "core": ["docker", "kubernetes"] }
            },
            {
                "role": "data analyst",
                "phases": { "foundation": ["sql", "excel"], "core": ["python"] }
            }
        ],
        "courses": {
            "docker": [ { "platform": "Udemy", "title": "Docker Mastery", "url": "https://www.udemy.com/course/docker-mastery/" } ],
            "kubernetes": [ { "platform": "Udemy", "title": "Kubernetes for the Absolute Beginners", "url": "https://www.udemy.com/course/learn-kubernetes/" } ],
            "python": [ { "platform": "Coursera", "title": "Python for Everybody", "url": "https://www.coursera.org/specializations/python" } ]
        }
    }"#;

    fn lookup(role: &str) -> TaxonomyLookup {
        TaxonomyCatalog::from_json_str(CATALOG)
            .unwrap()
            .lookup(role, "Healthcare", 2)
    }

    fn observations() -> Vec<SkillObservation> {
        vec![
            SkillObservation::new("Python", 0.9, SkillSource::Resume),
            SkillObservation::new("python", 0.4, SkillSource::Github),
            SkillObservation::new("git", 0.75, SkillSource::Github),
            SkillObservation::new("Docker", 0.5, SkillSource::Manual),
        ]
    }

    #[test]
    fn test_full_evaluation() {
        let report = evaluate(&observations(), &lookup("Software Engineer"), None);

        assert_eq!(report.target_role.as_deref(), Some("software engineer"));
        assert_eq!(report.stats.skills_total, 5);
        assert_eq!(report.stats.skills_complete, 2);
        assert_eq!(report.stats.skills_weak, 1);
        assert_eq!(report.stats.skills_missing, 2);
        // (2 + 0.5) / 5
        assert!((report.stats.readiness_score - 50.0).abs() < 1e-9);

        let python = &report.pathway[0].skills[0];
        assert_eq!(python.confidence, Some(0.9));
        assert_eq!(python.evidence.len(), 2);

        // devops: git, docker present of {linux, git, docker, kubernetes} = 50%
        // data analyst: python present of {sql, excel, python} = 33.3%
        let roles: Vec<&str> = report.suggested_roles.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, vec!["devops engineer", "data analyst"]);

        // Locally derived: missing kubernetes, then weak docker. System design
        // has no course and is dropped.
        let recs: Vec<(&str, RecommendationSource)> = report
            .recommendations
            .iter()
            .map(|r| (r.skill.as_str(), r.source))
            .collect();
        assert_eq!(
            recs,
            vec![
                ("kubernetes", RecommendationSource::Gap),
                ("docker", RecommendationSource::Gap)
            ]
        );
        let docker = &report.recommendations[1];
        assert_eq!(docker.confidence, Some(0.5));
        assert_eq!(
            docker.reason.as_deref(),
            Some("Strengthen existing knowledge (current: 50%)")
        );
        assert_eq!(docker.courses[0].title, "Docker Mastery");

        let kubernetes = &report.pathway[1].skills[1];
        assert_eq!(kubernetes.courses[0].title, "Kubernetes for the Absolute Beginners");
        assert!(python.courses.is_empty());
    }

    #[test]
    fn test_supplied_gap_stream_shadows_weak_skill() {
        let gaps = vec![RawGapRecommendation {
            skill: "DOCKER".to_string(),
            reason: Some("Required for role".to_string()),
            courses: vec![],
        }];
        let report = evaluate(&observations(), &lookup("software engineer"), Some(&gaps));

        assert_eq!(report.recommendations.len(), 1);
        let rec = &report.recommendations[0];
        assert_eq!(rec.source, RecommendationSource::Gap);
        assert_eq!(rec.reason.as_deref(), Some("Required for role"));
        assert_eq!(rec.confidence, Some(0.5));
        assert_eq!(rec.courses[0].title, "Docker Mastery");
    }

    #[test]
    fn test_unknown_role_degrades_to_empty_pathway() {
        let report = evaluate(&observations(), &lookup("lighthouse keeper"), None);

        assert_eq!(report.target_role, None);
        assert_eq!(report.pathway.len(), 4);
        assert!(report.pathway.iter().all(|p| p.skills.is_empty()));
        assert_eq!(report.stats.readiness_score, 0.0);
        assert!(report.recommendations.is_empty());
        assert_eq!(report.suggested_roles.len(), 3);
    }

    #[test]
    fn test_round_scores_to_two_decimals() {
        let observations = vec![SkillObservation::new("python", 0.9, SkillSource::Resume)];
        let mut report = evaluate(&observations, &lookup("devops engineer"), Some(&[]));
        // 0 of 4 for devops; data analyst 1 of 3.
        let analyst = report
            .suggested_roles
            .iter()
            .position(|r| r.role == "data analyst")
            .unwrap();
        assert!((report.suggested_roles[analyst].fit_score - 100.0 / 3.0).abs() < 1e-9);

        report.round_scores();
        assert_eq!(report.suggested_roles[analyst].fit_score, 33.33);
        assert_eq!(report.stats.readiness_score, 0.0);
    }

    #[test]
    fn test_truncate_for_display() {
        let many: Vec<SkillObservation> = (0..12)
            .map(|i| SkillObservation::new("git", 0.1 * (i % 10) as f64, SkillSource::Github))
            .collect();
        let mut report = evaluate(&many, &lookup("software engineer"), Some(&[]));
        assert_eq!(report.pathway[0].skills[1].evidence.len(), 12);

        report.truncate_for_display(8, 1);
        assert_eq!(report.pathway[0].skills[1].evidence.len(), 8);
        assert_eq!(report.suggested_roles.len(), 1);
    }
}
