//! Role Taxonomy Provider: the collaborator seam the engine reads role
//! requirements and courses through.
//!
//! `AppState` holds an `Arc<dyn TaxonomyProvider>`; the default backend is the
//! file-loaded `CatalogTaxonomyProvider`.

pub mod catalog;
pub mod role_match;

use std::path::Path;

use async_trait::async_trait;

use crate::errors::AppError;

pub use catalog::{TaxonomyCatalog, TaxonomyLookup};

#[async_trait]
pub trait TaxonomyProvider: Send + Sync {
    /// Resolves a target role. An unknown role is `Ok` with `resolved: None`.
    async fn lookup(&self, target_role: &str, target_sector: &str)
        -> Result<TaxonomyLookup, AppError>;

    async fn available_roles(&self) -> Result<Vec<String>, AppError>;
}

/// In-memory provider over a catalog loaded at startup.
pub struct CatalogTaxonomyProvider {
    catalog: TaxonomyCatalog,
    courses_per_skill: usize,
}

impl CatalogTaxonomyProvider {
    pub fn new(catalog: TaxonomyCatalog, courses_per_skill: usize) -> Self {
        Self {
            catalog,
            courses_per_skill,
        }
    }

    pub fn from_path(path: &Path, courses_per_skill: usize) -> Result<Self, AppError> {
        Ok(Self::new(TaxonomyCatalog::load(path)?, courses_per_skill))
    }
}

#[async_trait]
impl TaxonomyProvider for CatalogTaxonomyProvider {
    async fn lookup(
        &self,
        target_role: &str,
        target_sector: &str,
    ) -> Result<TaxonomyLookup, AppError> {
        Ok(self
            .catalog
            .lookup(target_role, target_sector, self.courses_per_skill))
    }

    async fn available_roles(&self) -> Result<Vec<String>, AppError> {
        Ok(self.catalog.available_roles())
    }
}
