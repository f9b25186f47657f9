//! Boundary validation: turns caller-supplied records into the typed inputs the
//! engine trusts. Shape violations fail loudly; out-of-range confidences are
//! clamped rather than rejected.

use tracing::warn;

use crate::errors::AppError;
use crate::readiness::models::{RawGapRecommendation, SkillObservation};
use crate::readiness::normalize::clamp_confidence;

pub fn validate_observations(
    observations: Vec<SkillObservation>,
) -> Result<Vec<SkillObservation>, AppError> {
    observations
        .into_iter()
        .enumerate()
        .map(|(i, mut obs)| {
            if obs.name.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "observations[{i}].name cannot be empty"
                )));
            }
            let clamped = clamp_confidence(obs.confidence);
            if clamped != obs.confidence {
                warn!(
                    "observations[{i}] '{}': confidence {} clamped to {clamped}",
                    obs.name, obs.confidence
                );
                obs.confidence = clamped;
            }
            Ok(obs)
        })
        .collect()
}

pub fn validate_gap_recommendations(
    recs: Vec<RawGapRecommendation>,
) -> Result<Vec<RawGapRecommendation>, AppError> {
    for (i, rec) in recs.iter().enumerate() {
        if rec.skill.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "gap_recommendations[{i}].skill cannot be empty"
            )));
        }
        if let Some(j) = rec.courses.iter().position(|c| c.title.trim().is_empty()) {
            return Err(AppError::Validation(format!(
                "gap_recommendations[{i}].courses[{j}].title cannot be empty"
            )));
        }
    }
    Ok(recs)
}

pub fn validate_target_role(target_role: &str) -> Result<&str, AppError> {
    let trimmed = target_role.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("target_role cannot be empty".to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::models::{Course, SkillSource};

    #[test]
    fn test_blank_observation_name_is_rejected() {
        let err = validate_observations(vec![
            SkillObservation::new("python", 0.5, SkillSource::Resume),
            SkillObservation::new("  ", 0.5, SkillSource::Manual),
        ])
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("observations[1]")));
    }

    #[test]
    fn test_out_of_range_confidence_is_clamped() {
        let out = validate_observations(vec![
            SkillObservation::new("a", 1.2, SkillSource::Manual),
            SkillObservation::new("b", -0.5, SkillSource::Manual),
            SkillObservation::new("c", 0.33, SkillSource::Manual),
        ])
        .unwrap();
        let confidences: Vec<f64> = out.iter().map(|o| o.confidence).collect();
        assert_eq!(confidences, vec![1.0, 0.0, 0.33]);
    }

    #[test]
    fn test_gap_recommendation_requires_skill() {
        let err = validate_gap_recommendations(vec![RawGapRecommendation {
            skill: String::new(),
            reason: None,
            courses: vec![],
        }])
        .unwrap_err();
        assert!(err.to_string().contains("gap_recommendations[0].skill"));
    }

    #[test]
    fn test_gap_recommendation_course_requires_title() {
        let err = validate_gap_recommendations(vec![RawGapRecommendation {
            skill: "docker".to_string(),
            reason: None,
            courses: vec![Course {
                platform: "Udemy".to_string(),
                title: " ".to_string(),
                url: "#".to_string(),
            }],
        }])
        .unwrap_err();
        assert!(err.to_string().contains("courses[0].title"));
    }

    #[test]
    fn test_target_role_is_trimmed_and_required() {
        assert_eq!(validate_target_role("  data scientist ").unwrap(), "data scientist");
        assert!(validate_target_role("   ").is_err());
    }

    #[test]
    fn test_malformed_payload_fails_deserialization() {
        let bad = serde_json::json!({ "name": "python", "confidence": "high", "source": "resume" });
        assert!(serde_json::from_value::<SkillObservation>(bad).is_err());

        let bad_source = serde_json::json!({ "name": "python", "confidence": 0.5, "source": "linkedin" });
        assert!(serde_json::from_value::<SkillObservation>(bad_source).is_err());
    }
}
