use crate::domain::{
    AppError, AuthStrategy, DatabaseKind, ModuleKind, OrmKind, ServiceKind, StackKind,
};

/// The fully resolved user selection for one project generation.
///
/// Immutable once built: module/service dependency expansion happens before
/// construction (see `services::resolver`), so downstream components can rely
/// on the sets being closed under their static dependency tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSelection {
    pub project_name: String,
    pub stack: StackKind,
    pub typescript: bool,
    pub eslint_prettier: bool,
    pub docker: bool,
    pub databases: Vec<DatabaseKind>,
    pub orm: OrmKind,
    pub services: Vec<ServiceKind>,
    pub modules: Vec<ModuleKind>,
    pub auth_strategy: Option<AuthStrategy>,
}

impl ProjectSelection {
    /// SQL-safe database/schema identifier derived from the project name.
    pub fn db_name(&self) -> String {
        self.project_name.replace('-', "_")
    }

    /// Prisma provider for this selection, when the ORM is Prisma.
    pub fn prisma_provider(&self) -> Option<DatabaseKind> {
        if self.orm != OrmKind::Prisma {
            return None;
        }
        DatabaseKind::primary_prisma_provider(&self.databases)
    }

    /// Whether any selected database or service has a containerized form.
    pub fn has_containerized_dependencies(&self) -> bool {
        self.databases.iter().any(DatabaseKind::is_containerized) || !self.services.is_empty()
    }

    /// Whether Docker files should be emitted at all.
    ///
    /// Docker requested with nothing to containerize produces no files for
    /// the locally-run category. PHP stacks always containerize the app.
    pub fn needs_docker(&self) -> bool {
        self.docker && (self.stack.is_php() || self.has_containerized_dependencies())
    }
}

/// Validate a project name for filesystem and npm safety.
pub fn validate_project_name(name: &str) -> Result<(), AppError> {
    let invalid = |reason: &str| AppError::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("project name is required"));
    }
    if name.len() > 214 {
        return Err(invalid("must be 214 characters or fewer"));
    }

    let mut chars = name.chars();
    let first = chars.next().unwrap_or(' ');
    if !(first.is_ascii_lowercase() || first.is_ascii_digit()) {
        return Err(invalid("must start with a lowercase letter or number"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'))
    {
        return Err(invalid(
            "may only contain lowercase letters, numbers, hyphens, dots, or underscores",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(name: &str) -> ProjectSelection {
        ProjectSelection {
            project_name: name.to_string(),
            stack: StackKind::Express,
            typescript: true,
            eslint_prettier: true,
            docker: true,
            databases: vec![],
            orm: OrmKind::None,
            services: vec![],
            modules: vec![],
            auth_strategy: None,
        }
    }

    #[test]
    fn db_name_replaces_hyphens() {
        assert_eq!(selection("my-cool-app").db_name(), "my_cool_app");
        assert_eq!(selection("plain").db_name(), "plain");
    }

    #[test]
    fn valid_names_pass() {
        for name in ["my-app", "app2", "a.b_c-d", "0start"] {
            assert!(validate_project_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn invalid_names_are_rejected() {
        for name in ["", "  ", "My-App", "-lead", ".lead", "has space", "ümlaut"] {
            assert!(validate_project_name(name).is_err(), "{name:?} should be invalid");
        }
        let long = "a".repeat(215);
        assert!(validate_project_name(&long).is_err());
    }

    #[test]
    fn docker_with_nothing_to_containerize_emits_nothing() {
        let mut sel = selection("my-app");
        assert!(!sel.needs_docker());
        sel.databases.push(DatabaseKind::Postgresql);
        assert!(sel.needs_docker());
    }

    #[test]
    fn php_stacks_always_containerize_the_app() {
        let mut sel = selection("my-app");
        sel.stack = StackKind::Laravel;
        assert!(sel.needs_docker());
        sel.docker = false;
        assert!(!sel.needs_docker());
    }

    #[test]
    fn sqlite_alone_has_no_containerized_dependencies() {
        let mut sel = selection("my-app");
        sel.databases.push(DatabaseKind::Sqlite);
        assert!(!sel.has_containerized_dependencies());
        // A file-based database gives Docker nothing to do.
        assert!(!sel.needs_docker());
    }

    #[test]
    fn prisma_provider_requires_prisma_orm() {
        let mut sel = selection("my-app");
        sel.databases.push(DatabaseKind::Postgresql);
        assert_eq!(sel.prisma_provider(), None);
        sel.orm = OrmKind::Prisma;
        assert_eq!(sel.prisma_provider(), Some(DatabaseKind::Postgresql));
    }
}
