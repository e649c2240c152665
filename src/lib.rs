//! stackforge: scaffold ready-to-run web projects with databases, services,
//! and feature modules wired together out of the box.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use console::style;

use app::{AppContext, commands};
use services::{EmbeddedTemplateStore, JsonProjectRegistry};

pub use app::cli::CreateOptions;
pub use app::commands::create::CreatedProject;
pub use domain::AppError;

/// Create a new project in the current directory.
pub fn create(options: CreateOptions) -> Result<(), AppError> {
    let selection = app::cli::resolve_selection(&options)?;
    let ctx = AppContext::new(EmbeddedTemplateStore::new(), JsonProjectRegistry::new_default()?);

    let cwd = std::env::current_dir()?;
    let created = commands::create::execute(&ctx, &selection, &cwd)?;

    println!(
        "{} Created {} ({})",
        style("✔").green(),
        style(&selection.project_name).bold(),
        selection.stack.label()
    );
    println!("\nNext steps:");
    for step in created.next_steps() {
        println!("  {step}");
    }
    Ok(())
}

/// List every project recorded in the registry, newest first.
pub fn list() -> Result<(), AppError> {
    let ctx = AppContext::new(EmbeddedTemplateStore::new(), JsonProjectRegistry::new_default()?);
    let entries = commands::list::execute(&ctx)?;

    if entries.is_empty() {
        println!("No projects yet. Run `stackforge <name>` to create one.");
        return Ok(());
    }
    for entry in entries {
        let extras = describe_extras(&entry.databases, &entry.modules);
        // created_at is RFC 3339; the date part is enough for a listing.
        let created = entry.created_at.split('T').next().unwrap_or(&entry.created_at);
        println!(
            "{}  {}  {}  {}{}",
            style(&entry.name).bold(),
            entry.stack,
            style(created).dim(),
            entry.path,
            extras
        );
    }
    Ok(())
}

fn describe_extras(databases: &[String], modules: &[String]) -> String {
    let mut parts = Vec::new();
    if !databases.is_empty() {
        parts.push(format!("db: {}", databases.join(",")));
    }
    if !modules.is_empty() {
        parts.push(format!("modules: {}", modules.join(",")));
    }
    if parts.is_empty() { String::new() } else { format!("  [{}]", parts.join("; ")) }
}

/// Create a project under an explicit parent directory. Used by integration
/// tests and embedders that do not want to rely on the process cwd.
pub fn create_in(options: CreateOptions, parent: &Path) -> Result<CreatedProject, AppError> {
    let selection = app::cli::resolve_selection(&options)?;
    let ctx = AppContext::new(EmbeddedTemplateStore::new(), JsonProjectRegistry::new_default()?);
    commands::create::execute(&ctx, &selection, parent)
}
