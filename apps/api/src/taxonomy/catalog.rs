//! Role taxonomy catalog: roles, their phased skill requirements, and the
//! course list per skill. Loaded once at startup from a JSON file.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::readiness::models::{CandidateRole, Course, Phase, TaxonomySkill};
use crate::readiness::normalize::skill_key;
use crate::taxonomy::role_match::match_role;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhaseSkills {
    #[serde(default)]
    pub foundation: Vec<String>,
    #[serde(default)]
    pub core: Vec<String>,
    #[serde(default)]
    pub advanced: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl PhaseSkills {
    pub fn for_phase(&self, phase: Phase) -> &[String] {
        match phase {
            Phase::Foundation => &self.foundation,
            Phase::Core => &self.core,
            Phase::Advanced => &self.advanced,
            Phase::Projects => &self.projects,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleDefinition {
    pub role: String,
    #[serde(default)]
    pub phases: PhaseSkills,
}

impl RoleDefinition {
    pub fn foundation_and_core(&self) -> Vec<String> {
        self.phases
            .foundation
            .iter()
            .chain(self.phases.core.iter())
            .cloned()
            .collect()
    }
}

/// Raw on-disk shape of the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    pub roles: Vec<RoleDefinition>,
    #[serde(default)]
    pub courses: HashMap<String, Vec<Course>>,
}

/// The taxonomy of the resolved target role, flattened across phases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleTaxonomy {
    pub role: String,
    pub skills: Vec<TaxonomySkill>,
}

/// Everything the engine needs from the taxonomy for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyLookup {
    pub target_role_input: String,
    pub target_sector: String,
    /// `None` when the requested role could not be resolved.
    pub resolved: Option<RoleTaxonomy>,
    pub available_roles: Vec<String>,
    pub alternates: Vec<CandidateRole>,
}

#[derive(Debug, Clone)]
pub struct TaxonomyCatalog {
    roles: Vec<RoleDefinition>,
    courses: HashMap<String, Vec<Course>>, // keyed by skill identity
}

impl TaxonomyCatalog {
    pub fn from_file(file: CatalogFile) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for def in &file.roles {
            let key = skill_key(&def.role);
            if key.is_empty() {
                return Err(AppError::Taxonomy("role name cannot be empty".to_string()));
            }
            if !seen.insert(key) {
                return Err(AppError::Taxonomy(format!(
                    "role '{}' is defined more than once",
                    def.role
                )));
            }
        }

        let mut courses: HashMap<String, Vec<Course>> = HashMap::new();
        for (skill, list) in file.courses {
            courses.entry(skill_key(&skill)).or_default().extend(list);
        }

        Ok(Self {
            roles: file.roles,
            courses,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| AppError::Taxonomy(format!("invalid catalog: {e}")))?;
        Self::from_file(file)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Taxonomy(format!("cannot read catalog {}: {e}", path.display()))
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "Loaded taxonomy catalog from {} ({} roles, {} skills with courses)",
            path.display(),
            catalog.roles.len(),
            catalog.courses.len()
        );
        Ok(catalog)
    }

    /// Sorted catalog role names.
    pub fn available_roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = self.roles.iter().map(|r| r.role.clone()).collect();
        roles.sort();
        roles
    }

    pub fn courses_for(&self, skill: &str, limit: usize) -> Vec<Course> {
        self.courses
            .get(&skill_key(skill))
            .map(|list| list.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }

    fn role_taxonomy(&self, def: &RoleDefinition, course_limit: usize) -> RoleTaxonomy {
        let skills = Phase::ALL
            .iter()
            .flat_map(|&phase| {
                def.phases.for_phase(phase).iter().map(move |name| TaxonomySkill {
                    name: name.clone(),
                    phase,
                    courses: self.courses_for(name, course_limit),
                })
            })
            .collect();
        RoleTaxonomy {
            role: def.role.clone(),
            skills,
        }
    }

    /// Resolves `target_role` and assembles the per-request taxonomy view.
    /// An unresolvable role yields `resolved: None`, not an error.
    pub fn lookup(&self, target_role: &str, target_sector: &str, course_limit: usize) -> TaxonomyLookup {
        let available_roles = self.available_roles();
        let catalog_order: Vec<String> = self.roles.iter().map(|r| r.role.clone()).collect();

        let resolved = match_role(target_role, &catalog_order).and_then(|name| {
            self.roles
                .iter()
                .find(|r| r.role == name)
                .map(|def| self.role_taxonomy(def, course_limit))
        });

        let resolved_key = resolved.as_ref().map(|r| skill_key(&r.role));
        let alternates = self
            .roles
            .iter()
            .filter(|def| resolved_key.as_deref() != Some(skill_key(&def.role).as_str()))
            .map(|def| CandidateRole {
                role: def.role.clone(),
                foundation_and_core_skills: def.foundation_and_core(),
            })
            .collect();

        TaxonomyLookup {
            target_role_input: target_role.to_string(),
            target_sector: target_sector.to_string(),
            resolved,
            available_roles,
            alternates,
        }
    }
}
