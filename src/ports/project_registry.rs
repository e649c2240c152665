use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// One recorded project in the persisted registry.
///
/// Selector fields are stored as slugs, not domain enums: the registry must
/// stay readable even after a selector is renamed or removed from the tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub stack: String,
    pub path: String,
    pub created_at: String,
    pub databases: Vec<String>,
    pub orm: String,
    pub services: Vec<String>,
    pub modules: Vec<String>,
}

/// Port for the per-user project registry.
///
/// Entries are keyed by project name: recording an existing name replaces its
/// entry. Injected rather than accessed as a module-level singleton so tests
/// can stub it and access stays serialized behind one collaborator.
pub trait ProjectRegistry {
    /// Load all recorded projects. A missing or corrupted registry is empty.
    fn load(&self) -> Result<Vec<RegistryEntry>, AppError>;

    /// Record a project, replacing any entry with the same name.
    fn record(&self, entry: RegistryEntry) -> Result<(), AppError>;
}
