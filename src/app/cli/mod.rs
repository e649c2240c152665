//! Flag parsing and interactive prompts that turn command-line input into a
//! validated `ProjectSelection`.
//!
//! Every field can come from a flag; whatever is missing is prompted for,
//! unless `--yes` accepts the defaults. Validation is the same on both paths,
//! so a flag-driven run can never produce a selection the wizard would
//! reject.

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::domain::{
    AppError, AuthStrategy, DatabaseKind, ModuleKind, OrmKind, ProjectSelection, ServiceKind,
    StackKind, validate_project_name,
};
use crate::services::resolver::{describe_module, expand_modules, expand_services, modules_for_stack};

/// Raw command-line input for project creation.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub name: Option<String>,
    pub stack: Option<String>,
    pub databases: Option<Vec<String>>,
    pub orm: Option<String>,
    pub services: Option<Vec<String>>,
    pub modules: Option<Vec<String>>,
    pub auth_strategy: Option<String>,
    pub no_docker: bool,
    pub no_typescript: bool,
    pub no_eslint: bool,
    pub yes: bool,
}

/// Resolve options into a validated selection, prompting for missing fields.
pub fn resolve_selection(opts: &CreateOptions) -> Result<ProjectSelection, AppError> {
    let project_name = resolve_name(opts)?;
    let stack = resolve_stack(opts)?;

    let typescript = if stack.is_js() {
        resolve_bool(opts.no_typescript, opts.yes, "Use TypeScript?")?
    } else {
        false
    };
    let eslint_prettier = if stack.is_js() {
        resolve_bool(opts.no_eslint, opts.yes, "Add ESLint + Prettier?")?
    } else {
        false
    };

    let databases = resolve_databases(opts)?;
    let orm = resolve_orm(opts, stack, &databases)?;
    let requested_services = resolve_services(opts)?;
    let requested_modules = resolve_modules(opts, stack)?;

    let modules = expand_modules(&requested_modules);
    let services = expand_services(&modules, &requested_services);

    let auth_strategy = if modules.contains(&ModuleKind::Auth) {
        Some(resolve_auth_strategy(opts)?)
    } else {
        None
    };

    let docker = resolve_bool(opts.no_docker, opts.yes, "Use Docker for databases/services?")?;

    let selection = ProjectSelection {
        project_name,
        stack,
        typescript,
        eslint_prettier,
        docker,
        databases,
        orm,
        services,
        modules,
        auth_strategy,
    };
    validate_selection(&selection)?;
    Ok(selection)
}

fn resolve_name(opts: &CreateOptions) -> Result<String, AppError> {
    if let Some(name) = &opts.name {
        validate_project_name(name)?;
        return Ok(name.clone());
    }
    if opts.yes {
        return Err(AppError::Validation(
            "A project name is required when running with --yes".to_string(),
        ));
    }
    loop {
        let name: String = Input::new()
            .with_prompt("Project name")
            .interact_text()
            .map_err(|e| AppError::Prompt(e.to_string()))?;
        match validate_project_name(&name) {
            Ok(()) => return Ok(name),
            Err(err) => eprintln!("{err}"),
        }
    }
}

fn resolve_stack(opts: &CreateOptions) -> Result<StackKind, AppError> {
    if let Some(slug) = &opts.stack {
        return StackKind::from_slug(slug).ok_or_else(|| unknown("stack", slug, stack_slugs()));
    }
    if opts.yes {
        return Ok(StackKind::Nextjs);
    }
    let items: Vec<String> = StackKind::ALL
        .iter()
        .map(|s| format!("{} ({})", s.label(), s.description()))
        .collect();
    let index = Select::new()
        .with_prompt("Select a stack")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| AppError::Prompt(e.to_string()))?
        .ok_or(AppError::Cancelled)?;
    Ok(StackKind::ALL[index])
}

fn resolve_databases(opts: &CreateOptions) -> Result<Vec<DatabaseKind>, AppError> {
    if let Some(slugs) = &opts.databases {
        let mut dbs = Vec::new();
        for slug in slugs {
            let db = DatabaseKind::from_slug(slug)
                .ok_or_else(|| unknown("database", slug, database_slugs()))?;
            if !dbs.contains(&db) {
                dbs.push(db);
            }
        }
        return Ok(dbs);
    }
    if opts.yes {
        return Ok(Vec::new());
    }
    let items: Vec<&str> = DatabaseKind::ALL.iter().map(|d| d.label()).collect();
    let picked = MultiSelect::new()
        .with_prompt("Select databases (space to toggle, enter to confirm)")
        .items(&items)
        .interact_opt()
        .map_err(|e| AppError::Prompt(e.to_string()))?
        .ok_or(AppError::Cancelled)?;
    Ok(picked.into_iter().map(|i| DatabaseKind::ALL[i]).collect())
}

fn resolve_orm(
    opts: &CreateOptions,
    stack: StackKind,
    databases: &[DatabaseKind],
) -> Result<OrmKind, AppError> {
    // PHP frameworks ship their ORM; a flag cannot override that.
    if let Some(implied) = OrmKind::implied_by(stack) {
        return Ok(implied);
    }
    if let Some(slug) = &opts.orm {
        return OrmKind::from_slug(slug).ok_or_else(|| unknown("orm", slug, orm_slugs()));
    }
    let prisma_possible = databases.iter().any(DatabaseKind::is_prisma_compatible);
    if opts.yes || !prisma_possible {
        return Ok(OrmKind::None);
    }
    let use_prisma = Confirm::new()
        .with_prompt("Use Prisma ORM?")
        .default(true)
        .interact_opt()
        .map_err(|e| AppError::Prompt(e.to_string()))?
        .ok_or(AppError::Cancelled)?;
    Ok(if use_prisma { OrmKind::Prisma } else { OrmKind::None })
}

fn resolve_services(opts: &CreateOptions) -> Result<Vec<ServiceKind>, AppError> {
    if let Some(slugs) = &opts.services {
        let mut services = Vec::new();
        for slug in slugs {
            let service = ServiceKind::from_slug(slug)
                .ok_or_else(|| unknown("service", slug, service_slugs()))?;
            if !services.contains(&service) {
                services.push(service);
            }
        }
        return Ok(services);
    }
    if opts.yes {
        return Ok(Vec::new());
    }
    let items: Vec<String> = ServiceKind::ALL
        .iter()
        .map(|s| format!("{} ({})", s.label(), s.purpose()))
        .collect();
    let picked = MultiSelect::new()
        .with_prompt("Select additional services")
        .items(&items)
        .interact_opt()
        .map_err(|e| AppError::Prompt(e.to_string()))?
        .ok_or(AppError::Cancelled)?;
    Ok(picked.into_iter().map(|i| ServiceKind::ALL[i]).collect())
}

fn resolve_modules(opts: &CreateOptions, stack: StackKind) -> Result<Vec<ModuleKind>, AppError> {
    if let Some(slugs) = &opts.modules {
        let mut modules = Vec::new();
        for slug in slugs {
            let module = ModuleKind::from_slug(slug)
                .ok_or_else(|| unknown("module", slug, module_slugs()))?;
            if !modules.contains(&module) {
                modules.push(module);
            }
        }
        return Ok(modules);
    }
    if opts.yes {
        return Ok(Vec::new());
    }
    let available = modules_for_stack(stack);
    let items: Vec<String> =
        available.iter().map(|m| format!("{} ({})", m.label, m.description)).collect();
    let picked = MultiSelect::new()
        .with_prompt("Select feature modules")
        .items(&items)
        .interact_opt()
        .map_err(|e| AppError::Prompt(e.to_string()))?
        .ok_or(AppError::Cancelled)?;
    Ok(picked.into_iter().map(|i| available[i].kind).collect())
}

fn resolve_auth_strategy(opts: &CreateOptions) -> Result<AuthStrategy, AppError> {
    if let Some(slug) = &opts.auth_strategy {
        return AuthStrategy::from_slug(slug)
            .ok_or_else(|| unknown("auth strategy", slug, "jwt, session".to_string()));
    }
    if opts.yes {
        return Ok(AuthStrategy::Jwt);
    }
    let items = ["JWT (stateless)", "Session (cookie-based)"];
    let index = Select::new()
        .with_prompt("Select auth strategy")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| AppError::Prompt(e.to_string()))?
        .ok_or(AppError::Cancelled)?;
    Ok(if index == 0 { AuthStrategy::Jwt } else { AuthStrategy::Session })
}

/// `--no-*` flags win; otherwise prompt, or default to true under `--yes`.
fn resolve_bool(negated: bool, yes: bool, prompt: &str) -> Result<bool, AppError> {
    if negated {
        return Ok(false);
    }
    if yes {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact_opt()
        .map_err(|e| AppError::Prompt(e.to_string()))?
        .ok_or(AppError::Cancelled)
}

/// Cross-field checks shared by the wizard and the flag path.
pub fn validate_selection(selection: &ProjectSelection) -> Result<(), AppError> {
    for module in &selection.modules {
        let descriptor = describe_module(*module);
        if !descriptor.supported_stacks.contains(&selection.stack) {
            return Err(AppError::Validation(format!(
                "Module '{}' is not available for the {} stack",
                module.slug(),
                selection.stack.label()
            )));
        }
        if descriptor.requires_database && selection.databases.is_empty() {
            return Err(AppError::Validation(format!(
                "Module '{}' requires a database. Add one with --db",
                module.slug()
            )));
        }
    }

    match selection.orm {
        OrmKind::Prisma => {
            if !selection.stack.is_js() {
                return Err(AppError::Validation(
                    "Prisma is only available for JavaScript stacks".to_string(),
                ));
            }
            if selection.prisma_provider().is_none() {
                return Err(AppError::Validation(
                    "Prisma requires a compatible database (postgresql, mysql, or sqlite)"
                        .to_string(),
                ));
            }
        }
        OrmKind::Doctrine if selection.stack != StackKind::Symfony => {
            return Err(AppError::Validation(
                "Doctrine is only available for the Symfony stack".to_string(),
            ));
        }
        OrmKind::Eloquent if selection.stack != StackKind::Laravel => {
            return Err(AppError::Validation(
                "Eloquent is only available for the Laravel stack".to_string(),
            ));
        }
        _ => {}
    }

    Ok(())
}

fn unknown(what: &'static str, value: &str, available: String) -> AppError {
    AppError::UnknownSelector { what, value: value.to_string(), available }
}

fn stack_slugs() -> String {
    StackKind::ALL.iter().map(|s| s.slug()).collect::<Vec<_>>().join(", ")
}

fn database_slugs() -> String {
    DatabaseKind::ALL.iter().map(|d| d.slug()).collect::<Vec<_>>().join(", ")
}

fn orm_slugs() -> String {
    OrmKind::ALL.iter().map(|o| o.slug()).collect::<Vec<_>>().join(", ")
}

fn module_slugs() -> String {
    ModuleKind::ALL.iter().map(|m| m.slug()).collect::<Vec<_>>().join(", ")
}

fn service_slugs() -> String {
    ServiceKind::ALL.iter().map(|s| s.slug()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag_options() -> CreateOptions {
        CreateOptions {
            name: Some("my-app".to_string()),
            stack: Some("nextjs".to_string()),
            databases: Some(vec!["postgresql".to_string()]),
            orm: Some("prisma".to_string()),
            services: None,
            modules: Some(vec!["admin".to_string()]),
            auth_strategy: None,
            no_docker: false,
            no_typescript: false,
            no_eslint: false,
            yes: true,
        }
    }

    #[test]
    fn flags_resolve_without_prompting() {
        let selection = resolve_selection(&flag_options()).unwrap();
        assert_eq!(selection.project_name, "my-app");
        assert_eq!(selection.stack, StackKind::Nextjs);
        assert_eq!(selection.orm, OrmKind::Prisma);
        assert!(selection.docker);
        assert!(selection.typescript);
    }

    #[test]
    fn module_outside_its_supported_stacks_is_rejected() {
        let mut opts = flag_options();
        opts.stack = Some("express".to_string());
        let err = resolve_selection(&opts).unwrap_err();
        assert!(err.to_string().contains("not available for the Express stack"));
    }

    #[test]
    fn admin_module_pulls_in_auth_and_a_strategy() {
        let selection = resolve_selection(&flag_options()).unwrap();
        assert!(selection.modules.contains(&ModuleKind::Auth));
        assert_eq!(selection.auth_strategy, Some(AuthStrategy::Jwt));
    }

    #[test]
    fn module_service_requirements_are_expanded() {
        let mut opts = flag_options();
        opts.modules = Some(vec!["file-upload".to_string(), "email".to_string()]);
        let selection = resolve_selection(&opts).unwrap();
        assert!(selection.services.contains(&ServiceKind::Minio));
        assert!(selection.services.contains(&ServiceKind::Mailpit));
    }

    #[test]
    fn unknown_stack_flag_is_rejected_with_alternatives() {
        let mut opts = flag_options();
        opts.stack = Some("rails".to_string());
        let err = resolve_selection(&opts).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("rails"));
        assert!(message.contains("nextjs"));
    }

    #[test]
    fn prisma_without_compatible_database_is_rejected() {
        let mut opts = flag_options();
        opts.databases = Some(vec!["mongodb".to_string()]);
        let err = resolve_selection(&opts).unwrap_err();
        assert!(err.to_string().contains("compatible database"));
    }

    #[test]
    fn php_stack_implies_its_orm_regardless_of_flags() {
        let mut opts = flag_options();
        opts.stack = Some("laravel".to_string());
        opts.orm = Some("prisma".to_string());
        let selection = resolve_selection(&opts).unwrap();
        assert_eq!(selection.orm, OrmKind::Eloquent);
        assert!(!selection.typescript);
        assert!(!selection.eslint_prettier);
    }

    #[test]
    fn auth_requires_a_database() {
        let mut opts = flag_options();
        opts.databases = Some(vec![]);
        opts.orm = Some("none".to_string());
        opts.modules = Some(vec!["auth".to_string()]);
        let err = resolve_selection(&opts).unwrap_err();
        assert!(err.to_string().contains("requires a database"));
    }

    #[test]
    fn yes_without_name_fails_cleanly() {
        let opts = CreateOptions { yes: true, ..CreateOptions::default() };
        let err = resolve_selection(&opts).unwrap_err();
        assert!(err.to_string().contains("project name"));
    }
}
