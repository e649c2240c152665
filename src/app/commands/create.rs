//! Project materialization: turns a validated selection into files on disk.
//!
//! Generation is atomic at the project level. The target directory must not
//! exist beforehand; if any step fails after it was created, the whole
//! directory is removed before the error propagates, so a failed run leaves
//! no partial project behind.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use console::style;

use crate::app::AppContext;
use crate::domain::{
    AppError, DatabaseKind, HostMap, ModuleKind, OrmKind, ProjectSelection, ServiceKind,
    StackKind, VersionSet, validate_project_name,
};
use crate::ports::{ProjectRegistry, RegistryEntry, TemplateStore};
use crate::services::plan::{RenderPlanEntry, TemplateContext, build_render_plan};
use crate::services::{compose, guide};

/// Outcome of a successful generation, used for the final report.
#[derive(Debug)]
pub struct CreatedProject {
    pub path: PathBuf,
    pub selection: ProjectSelection,
}

pub fn execute<T: TemplateStore, R: ProjectRegistry>(
    ctx: &AppContext<T, R>,
    selection: &ProjectSelection,
    parent: &Path,
) -> Result<CreatedProject, AppError> {
    validate_project_name(&selection.project_name)?;

    let target = parent.join(&selection.project_name);
    if target.exists() {
        return Err(AppError::ProjectDirExists(selection.project_name.clone()));
    }

    fs::create_dir_all(&target)?;
    if let Err(err) = materialize(ctx, selection, &target) {
        // Rollback: the directory did not exist before this run, so removing
        // it restores the previous state. A cleanup failure must not mask
        // the original error.
        let _ = fs::remove_dir_all(&target);
        return Err(err);
    }

    record_in_registry(ctx.registry(), selection, &target);

    Ok(CreatedProject { path: target, selection: selection.clone() })
}

fn materialize<T: TemplateStore, R: ProjectRegistry>(
    ctx: &AppContext<T, R>,
    selection: &ProjectSelection,
    target: &Path,
) -> Result<(), AppError> {
    let versions = VersionSet::default();
    let hosts = HostMap::resolve(selection);
    let template_ctx = TemplateContext::build(selection, &versions, &hosts);
    let plan = build_render_plan(selection);

    if selection.databases.contains(&DatabaseKind::Sqlite) {
        fs::create_dir_all(target.join("data"))?;
    }

    render_section(ctx.templates(), &plan.shared, &template_ctx, target)?;

    render_section(ctx.templates(), &plan.container, &template_ctx, target)?;
    if selection.docker {
        let document = compose::assemble_compose(selection, &versions);
        // Nothing to orchestrate means no compose file at all, not an empty one.
        if !document.is_empty() {
            fs::write(target.join("docker-compose.yml"), document)?;
        }
    }

    render_section(ctx.templates(), &plan.orm, &template_ctx, target)?;
    render_section(ctx.templates(), &plan.stack, &template_ctx, target)?;
    render_section(ctx.templates(), &plan.modules, &template_ctx, target)?;

    render_section(ctx.templates(), &plan.docs, &template_ctx, target)?;
    fs::write(target.join("agent.md"), guide::generate_guide(selection, &versions, &hosts))?;

    Ok(())
}

fn render_section<T: TemplateStore>(
    templates: &T,
    entries: &[RenderPlanEntry],
    ctx: &TemplateContext,
    target: &Path,
) -> Result<(), AppError> {
    for entry in entries {
        for dir in entry.required_dirs() {
            fs::create_dir_all(target.join(dir))?;
        }
        let content = templates.render(&entry.template, ctx)?;
        fs::write(target.join(&entry.output), content)?;
    }
    Ok(())
}

/// Registry persistence is best-effort: a failure here must never fail (or
/// roll back) a generation that already completed.
fn record_in_registry<R: ProjectRegistry>(
    registry: &R,
    selection: &ProjectSelection,
    target: &Path,
) {
    let entry = RegistryEntry {
        name: selection.project_name.clone(),
        stack: selection.stack.slug().to_string(),
        path: target.display().to_string(),
        created_at: Utc::now().to_rfc3339(),
        databases: selection.databases.iter().map(|d| d.slug().to_string()).collect(),
        orm: selection.orm.slug().to_string(),
        services: selection.services.iter().map(|s| s.slug().to_string()).collect(),
        modules: selection.modules.iter().map(|m| m.slug().to_string()).collect(),
    };
    if let Err(err) = registry.record(entry) {
        eprintln!("{} could not update project registry: {err}", style("warning:").yellow());
    }
}

impl CreatedProject {
    /// Human-readable next steps, matching what was actually generated.
    pub fn next_steps(&self) -> Vec<String> {
        let mut steps = vec![format!("cd {}", self.selection.project_name)];
        if self.selection.stack.is_js() {
            if self.selection.needs_docker() {
                steps.push("docker compose up -d".to_string());
            }
            if self.selection.stack == StackKind::ViteReactExpress {
                steps.push("npm run install:all".to_string());
            } else {
                steps.push("npm install".to_string());
            }
            if self.selection.orm == OrmKind::Prisma {
                if self.selection.stack == StackKind::ViteReactExpress {
                    steps.push("npm --prefix server run db:migrate".to_string());
                } else {
                    steps.push("npx prisma migrate dev".to_string());
                }
            }
            steps.push("npm run dev".to_string());
        } else {
            steps.push("docker compose up --watch".to_string());
            steps.push(format!(
                "open http://localhost:{}",
                self.selection.stack.default_port()
            ));
        }
        if self.selection.services.contains(&ServiceKind::Mailpit) {
            steps.push("open http://localhost:8025  # Mailpit".to_string());
        }
        if self.selection.modules.contains(&ModuleKind::Auth) {
            steps.push("review .env and change JWT_SECRET before deploying".to_string());
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuthStrategy;
    use crate::services::{EmbeddedTemplateStore, JsonProjectRegistry};
    use tempfile::TempDir;

    fn app_context(dir: &TempDir) -> AppContext<EmbeddedTemplateStore, JsonProjectRegistry> {
        AppContext::new(
            EmbeddedTemplateStore::new(),
            JsonProjectRegistry::with_path(dir.path().join("registry/projects.json")),
        )
    }

    fn selection() -> ProjectSelection {
        ProjectSelection {
            project_name: "demo-app".to_string(),
            stack: StackKind::Express,
            typescript: true,
            eslint_prettier: true,
            docker: true,
            databases: vec![DatabaseKind::Postgresql],
            orm: OrmKind::Prisma,
            services: vec![ServiceKind::Mailpit],
            modules: vec![ModuleKind::Auth],
            auth_strategy: Some(AuthStrategy::Jwt),
        }
    }

    #[test]
    fn generation_produces_expected_files() {
        let dir = TempDir::new().unwrap();
        let ctx = app_context(&dir);
        let created = execute(&ctx, &selection(), dir.path()).unwrap();

        for file in [
            ".env",
            ".gitignore",
            "docker-compose.yml",
            "Dockerfile",
            "package.json",
            "prisma/schema.prisma",
            "src/index.ts",
            "src/routes/auth.ts",
            "README.md",
            "agent.md",
        ] {
            assert!(created.path.join(file).is_file(), "missing {file}");
        }
    }

    #[test]
    fn existing_directory_is_never_touched() {
        let dir = TempDir::new().unwrap();
        let ctx = app_context(&dir);
        let target = dir.path().join("demo-app");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("keep.txt"), "precious").unwrap();

        let err = execute(&ctx, &selection(), dir.path()).unwrap_err();
        assert!(matches!(err, AppError::ProjectDirExists(_)));
        assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "precious");
    }

    #[test]
    fn failed_generation_rolls_back_the_directory() {
        struct FailingStore;
        impl TemplateStore for FailingStore {
            fn render(&self, path: &str, _ctx: &TemplateContext) -> Result<String, AppError> {
                if path.starts_with("express/") {
                    return Err(AppError::TemplateNotFound(path.to_string()));
                }
                Ok(String::new())
            }
            fn contains(&self, _path: &str) -> bool {
                true
            }
        }

        let dir = TempDir::new().unwrap();
        let ctx = AppContext::new(
            FailingStore,
            JsonProjectRegistry::with_path(dir.path().join("registry/projects.json")),
        );
        let err = execute(&ctx, &selection(), dir.path()).unwrap_err();
        assert!(matches!(err, AppError::TemplateNotFound(_)));
        assert!(!dir.path().join("demo-app").exists(), "rollback should remove the directory");
    }

    #[test]
    fn sqlite_only_selection_skips_compose_but_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let ctx = app_context(&dir);
        let mut sel = selection();
        sel.databases = vec![DatabaseKind::Sqlite];
        sel.services.clear();
        sel.modules.clear();
        sel.auth_strategy = None;
        let created = execute(&ctx, &sel, dir.path()).unwrap();

        assert!(created.path.join("data").is_dir());
        assert!(!created.path.join("docker-compose.yml").exists());
        assert!(!created.path.join("Dockerfile").exists());
    }

    #[test]
    fn successful_generation_is_recorded_in_registry() {
        let dir = TempDir::new().unwrap();
        let ctx = app_context(&dir);
        execute(&ctx, &selection(), dir.path()).unwrap();

        let entries = ctx.registry().load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "demo-app");
        assert_eq!(entries[0].stack, "express");
        assert_eq!(entries[0].modules, vec!["auth".to_string()]);
    }

    #[test]
    fn php_next_steps_lead_with_compose_watch() {
        let dir = TempDir::new().unwrap();
        let ctx = app_context(&dir);
        let mut sel = selection();
        sel.stack = StackKind::Laravel;
        sel.orm = OrmKind::Eloquent;
        sel.typescript = false;
        sel.eslint_prettier = false;
        let created = execute(&ctx, &sel, dir.path()).unwrap();

        let steps = created.next_steps();
        assert_eq!(steps[0], "cd demo-app");
        assert_eq!(steps[1], "docker compose up --watch");
        assert!(steps.iter().any(|s| s.contains("localhost:8000")));
    }
}
