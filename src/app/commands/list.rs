use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ProjectRegistry, RegistryEntry, TemplateStore};

/// Load all recorded projects, newest first.
pub fn execute<T: TemplateStore, R: ProjectRegistry>(
    ctx: &AppContext<T, R>,
) -> Result<Vec<RegistryEntry>, AppError> {
    let mut entries = ctx.registry().load()?;
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{EmbeddedTemplateStore, JsonProjectRegistry};
    use tempfile::TempDir;

    fn entry(name: &str, created_at: &str) -> RegistryEntry {
        RegistryEntry {
            name: name.to_string(),
            stack: "nextjs".to_string(),
            path: format!("/tmp/{name}"),
            created_at: created_at.to_string(),
            databases: vec![],
            orm: "none".to_string(),
            services: vec![],
            modules: vec![],
        }
    }

    #[test]
    fn entries_come_back_newest_first() {
        let dir = TempDir::new().unwrap();
        let registry = JsonProjectRegistry::with_path(dir.path().join("projects.json"));
        registry.record(entry("old", "2026-01-01T00:00:00Z")).unwrap();
        registry.record(entry("new", "2026-06-01T00:00:00Z")).unwrap();

        let ctx = AppContext::new(EmbeddedTemplateStore::new(), registry);
        let entries = execute(&ctx).unwrap();
        assert_eq!(entries[0].name, "new");
        assert_eq!(entries[1].name, "old");
    }
}
