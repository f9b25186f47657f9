#![allow(dead_code)]

//! Shared normalization helpers: skill identity, confidence clamping, and the
//! observation index every downstream component looks skills up in.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::readiness::models::{SkillObservation, SkillSource, TaxonomySkill};

/// Case-insensitive, whitespace-trimmed skill identity.
pub fn skill_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Clamps a confidence into `[0, 1]`. NaN is treated as no confidence at all.
pub fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return 0.0;
    }
    confidence.clamp(0.0, 1.0)
}

/// Tie-break rank for equal-confidence observations of the same skill.
/// Lower wins: resume > github > manual.
pub fn source_precedence(source: SkillSource) -> u8 {
    match source {
        SkillSource::Resume => 0,
        SkillSource::Github => 1,
        SkillSource::Manual => 2,
    }
}

/// Finds a taxonomy skill by identity. With duplicate definitions the last
/// one wins, matching `dedup_last_wins`.
pub fn find_taxonomy_skill<'a>(taxonomy: &'a [TaxonomySkill], name: &str) -> Option<&'a TaxonomySkill> {
    let key = skill_key(name);
    taxonomy.iter().rev().find(|t| skill_key(&t.name) == key)
}

/// Removes earlier duplicates (by skill identity) so the last definition wins.
/// Surviving skills keep their relative order.
pub fn dedup_last_wins(skills: &[TaxonomySkill]) -> Vec<TaxonomySkill> {
    let mut last_index: HashMap<String, usize> = HashMap::new();
    for (i, skill) in skills.iter().enumerate() {
        last_index.insert(skill_key(&skill.name), i);
    }

    let deduped: Vec<TaxonomySkill> = skills
        .iter()
        .enumerate()
        .filter(|(i, skill)| last_index.get(&skill_key(&skill.name)) == Some(i))
        .map(|(_, skill)| skill.clone())
        .collect();

    if deduped.len() != skills.len() {
        debug!(
            "Dropped {} duplicate taxonomy skill definition(s)",
            skills.len() - deduped.len()
        );
    }
    deduped
}

/// The authoritative observation for one skill identity plus every raw
/// observation that shares it.
#[derive(Debug, Clone)]
pub struct IndexedSkill {
    pub confidence: f64,
    pub source: SkillSource,
    pub evidence: Vec<String>,
}

/// Lookup from skill identity to its highest-confidence observation.
#[derive(Debug, Clone, Default)]
pub struct ObservationIndex {
    skills: HashMap<String, IndexedSkill>,
}

impl ObservationIndex {
    pub fn build(observations: &[SkillObservation]) -> Self {
        let mut skills: HashMap<String, IndexedSkill> = HashMap::new();

        for obs in observations {
            let key = skill_key(&obs.name);
            if key.is_empty() {
                continue;
            }

            let confidence = clamp_confidence(obs.confidence);
            if confidence != obs.confidence {
                warn!(
                    "Clamped confidence {} for skill '{}' ({}) to {}",
                    obs.confidence, obs.name, obs.source, confidence
                );
            }
            let evidence = format!("{} ({})", obs.name.trim(), obs.source);

            match skills.get_mut(&key) {
                Some(existing) => {
                    existing.evidence.push(evidence);
                    let beats = confidence > existing.confidence
                        || (confidence == existing.confidence
                            && source_precedence(obs.source) < source_precedence(existing.source));
                    if beats {
                        existing.confidence = confidence;
                        existing.source = obs.source;
                    }
                }
                None => {
                    skills.insert(
                        key,
                        IndexedSkill {
                            confidence,
                            source: obs.source,
                            evidence: vec![evidence],
                        },
                    );
                }
            }
        }

        Self { skills }
    }

    pub fn get(&self, name: &str) -> Option<&IndexedSkill> {
        self.skills.get(&skill_key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains_key(&skill_key(name))
    }

    pub fn confidence(&self, name: &str) -> Option<f64> {
        self.get(name).map(|s| s.confidence)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::models::{Course, Phase};

    fn with_course(name: &str, title: &str) -> TaxonomySkill {
        let mut skill = TaxonomySkill::new(name, Phase::Core);
        skill.courses.push(Course {
            platform: "Udemy".to_string(),
            title: title.to_string(),
            url: "#".to_string(),
        });
        skill
    }

    #[test]
    fn test_find_taxonomy_skill_prefers_last_definition() {
        let taxonomy = vec![
            with_course("docker", "OLD"),
            TaxonomySkill::new("git", Phase::Foundation),
            with_course("Docker", "NEW"),
        ];

        let found = find_taxonomy_skill(&taxonomy, " DOCKER").unwrap();
        assert_eq!(found.courses[0].title, "NEW");
        assert!(find_taxonomy_skill(&taxonomy, "rust").is_none());
    }

    #[test]
    fn test_skill_key_trims_and_lowercases() {
        assert_eq!(skill_key("  Node.JS "), "node.js");
        assert_eq!(skill_key("Docker"), skill_key("docker"));
    }

    #[test]
    fn test_clamp_confidence_bounds() {
        assert_eq!(clamp_confidence(-0.2), 0.0);
        assert_eq!(clamp_confidence(1.7), 1.0);
        assert_eq!(clamp_confidence(0.42), 0.42);
        assert_eq!(clamp_confidence(f64::NAN), 0.0);
    }

    #[test]
    fn test_index_keeps_max_confidence() {
        let index = ObservationIndex::build(&[
            SkillObservation::new("Python", 0.4, SkillSource::Github),
            SkillObservation::new("python", 0.9, SkillSource::Resume),
        ]);
        let py = index.get("PYTHON").unwrap();
        assert_eq!(py.confidence, 0.9);
        assert_eq!(py.source, SkillSource::Resume);
        assert_eq!(py.evidence, vec!["Python (github)", "python (resume)"]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_tie_prefers_resume_over_github_over_manual() {
        let index = ObservationIndex::build(&[
            SkillObservation::new("sql", 0.6, SkillSource::Manual),
            SkillObservation::new("sql", 0.6, SkillSource::Github),
        ]);
        assert_eq!(index.get("sql").unwrap().source, SkillSource::Github);

        let index = ObservationIndex::build(&[
            SkillObservation::new("sql", 0.6, SkillSource::Github),
            SkillObservation::new("SQL", 0.6, SkillSource::Resume),
            SkillObservation::new("sql", 0.6, SkillSource::Manual),
        ]);
        assert_eq!(index.get("sql").unwrap().source, SkillSource::Resume);
    }

    #[test]
    fn test_index_clamps_out_of_range() {
        let index = ObservationIndex::build(&[
            SkillObservation::new("rust", 1.4, SkillSource::Manual),
            SkillObservation::new("go", -0.3, SkillSource::Manual),
        ]);
        assert_eq!(index.confidence("rust"), Some(1.0));
        assert_eq!(index.confidence("go"), Some(0.0));
    }

    #[test]
    fn test_index_skips_blank_names() {
        let index = ObservationIndex::build(&[SkillObservation::new("   ", 0.9, SkillSource::Resume)]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_dedup_last_wins_keeps_last_definition() {
        let skills = vec![
            with_course("Docker", "Old"),
            TaxonomySkill::new("sql", Phase::Core),
            TaxonomySkill::new("docker", Phase::Core),
        ];
        let deduped = dedup_last_wins(&skills);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].name, "sql");
        assert_eq!(deduped[1].name, "docker");
        assert!(deduped[1].courses.is_empty());
    }
}
