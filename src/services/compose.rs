//! Docker Compose assembly.
//!
//! Two topology shapes exist:
//! - locally-run (JS) stacks get database/service containers only; the app
//!   itself runs on the host, and an empty selection yields an empty document
//!   (callers must then skip writing the file),
//! - fully containerized (PHP) stacks additionally get one `app` container
//!   that builds locally, health-gates on every database, and declares
//!   Compose Watch sync rules for the stack's source layout.
//!
//! Output is plain line assembly rather than a YAML serializer: generated
//! files are asserted on literal substrings and must stay byte-stable.

use crate::domain::{ProjectSelection, StackCategory, StackKind, VersionSet};
use crate::services::catalog::{ServiceDescriptor, describe_database, describe_service};

/// Fixed port the app container listens on internally (PHP shape).
const APP_CONTAINER_PORT: u16 = 80;

/// Assemble the compose document for a resolved selection.
///
/// Returns an empty string when nothing needs containerizing on a locally-run
/// stack; no file should be written in that case.
pub fn assemble_compose(selection: &ProjectSelection, versions: &VersionSet) -> String {
    match selection.stack.category() {
        StackCategory::Js => assemble_services_only(selection, versions),
        StackCategory::Php => assemble_app_with_services(selection, versions),
    }
}

fn docker_databases(selection: &ProjectSelection, versions: &VersionSet) -> Vec<ServiceDescriptor> {
    // Skips the file-based kind (SQLite).
    selection
        .databases
        .iter()
        .filter_map(|db| describe_database(*db, &selection.project_name, versions))
        .collect()
}

fn assemble_services_only(selection: &ProjectSelection, versions: &VersionSet) -> String {
    let databases = docker_databases(selection, versions);

    if databases.is_empty() && selection.services.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push("# Docker services — app runs locally with `npm run dev`".to_string());
    lines.push("services:".to_string());

    for descriptor in &databases {
        push_descriptor_block(&mut lines, descriptor);
    }
    for service in &selection.services {
        push_descriptor_block(&mut lines, &describe_service(*service));
    }

    push_volume_section(&mut lines, &databases, selection);

    lines.join("\n") + "\n"
}

fn assemble_app_with_services(selection: &ProjectSelection, versions: &VersionSet) -> String {
    let databases = docker_databases(selection, versions);
    let port = selection.stack.default_port();

    let mut lines: Vec<String> = Vec::new();
    lines.push("services:".to_string());
    lines.push(String::new());
    lines.push("  app:".to_string());
    lines.push("    build:".to_string());
    lines.push("      context: .".to_string());
    lines.push("      dockerfile: Dockerfile".to_string());
    lines.push("    ports:".to_string());
    lines.push(format!("      - \"{port}:{APP_CONTAINER_PORT}\""));
    lines.push("    env_file:".to_string());
    lines.push("      - .env".to_string());

    if !databases.is_empty() {
        lines.push("    depends_on:".to_string());
        for descriptor in &databases {
            lines.push(format!("      {}:", descriptor.service_name));
            lines.push("        condition: service_healthy".to_string());
        }
    }

    push_watch_section(&mut lines, selection.stack);

    for descriptor in &databases {
        push_descriptor_block(&mut lines, descriptor);
    }
    for service in &selection.services {
        push_descriptor_block(&mut lines, &describe_service(*service));
    }

    push_volume_section(&mut lines, &databases, selection);

    lines.join("\n") + "\n"
}

/// Compose Watch rules: synced source subdirectories per PHP stack, with the
/// dependency manifest as the sole full-rebuild trigger.
fn push_watch_section(lines: &mut Vec<String>, stack: StackKind) {
    lines.push("    develop:".to_string());
    lines.push("      watch:".to_string());

    let sync_paths: &[(&str, &str)] = match stack {
        StackKind::Symfony => {
            &[("./src", "/app/src"), ("./config", "/app/config"), ("./templates", "/app/templates")]
        }
        StackKind::Laravel => &[
            ("./app", "/app/app"),
            ("./resources", "/app/resources"),
            ("./routes", "/app/routes"),
            ("./config", "/app/config"),
        ],
        _ => &[],
    };

    for (path, target) in sync_paths {
        lines.push("        - action: sync".to_string());
        lines.push(format!("          path: {path}"));
        lines.push(format!("          target: {target}"));
    }
    lines.push("        - action: rebuild".to_string());
    lines.push("          path: ./composer.json".to_string());
}

fn push_descriptor_block(lines: &mut Vec<String>, descriptor: &ServiceDescriptor) {
    lines.push(String::new());
    lines.push(format!("  {}:", descriptor.service_name));
    lines.push(format!("    image: {}", descriptor.image));

    if let Some(command) = descriptor.command {
        lines.push(format!("    command: {command}"));
    }

    if !descriptor.ports.is_empty() {
        lines.push("    ports:".to_string());
        for port in &descriptor.ports {
            lines.push(format!("      - \"{port}\""));
        }
    }

    if !descriptor.environment.is_empty() {
        lines.push("    environment:".to_string());
        for (key, value) in &descriptor.environment {
            lines.push(format!("      {key}: \"{value}\""));
        }
    }

    if !descriptor.volumes.is_empty() {
        lines.push("    volumes:".to_string());
        for volume in &descriptor.volumes {
            lines.push(format!("      - {volume}"));
        }
    }

    if let Some(check) = &descriptor.healthcheck {
        lines.push("    healthcheck:".to_string());
        lines.push(format!("      test: [\"CMD-SHELL\", \"{}\"]", check.test));
        lines.push(format!("      interval: {}", check.interval));
        lines.push(format!("      timeout: {}", check.timeout));
        lines.push(format!("      retries: {}", check.retries));
    }
}

/// Declare every named volume exactly once, databases first then services,
/// in selection order.
fn push_volume_section(
    lines: &mut Vec<String>,
    databases: &[ServiceDescriptor],
    selection: &ProjectSelection,
) {
    let mut names: Vec<&str> = Vec::new();
    let mut collect = |volumes: &[&'static str]| {
        for volume in volumes {
            let name = volume.split(':').next().unwrap_or(volume);
            if !names.contains(&name) {
                names.push(name);
            }
        }
    };

    for descriptor in databases {
        collect(&descriptor.volumes);
    }
    for service in &selection.services {
        collect(&describe_service(*service).volumes);
    }

    if names.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push("volumes:".to_string());
    for name in names {
        lines.push(format!("  {name}:"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DatabaseKind, OrmKind, ServiceKind};

    fn selection(stack: StackKind) -> ProjectSelection {
        ProjectSelection {
            project_name: "test-app".to_string(),
            stack,
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
    fn empty_js_selection_yields_empty_document() {
        let sel = selection(StackKind::Express);
        assert_eq!(assemble_compose(&sel, &VersionSet::default()), "");
    }

    #[test]
    fn sqlite_only_js_selection_yields_empty_document() {
        let mut sel = selection(StackKind::Express);
        sel.databases.push(DatabaseKind::Sqlite);
        assert_eq!(assemble_compose(&sel, &VersionSet::default()), "");
    }

    #[test]
    fn js_postgres_block_has_literal_image_and_port() {
        let versions = VersionSet::default();
        let mut sel = selection(StackKind::Nextjs);
        sel.databases.push(DatabaseKind::Postgresql);
        let yaml = assemble_compose(&sel, &versions);

        assert!(yaml.contains("db-postgres:"));
        assert!(yaml.contains(&format!("image: postgres:{}-alpine", versions.databases.postgresql)));
        assert!(yaml.contains("- \"5432:5432\""));
        assert!(yaml.contains("POSTGRES_DB: \"test_app\""));
        assert!(yaml.contains("pg_isready -U postgres"));
        assert!(!yaml.contains("mailpit"));
        assert!(!yaml.contains("app:"));
    }

    #[test]
    fn mailpit_only_selection_matches_descriptor_verbatim() {
        let mut sel = selection(StackKind::Express);
        sel.services.push(ServiceKind::Mailpit);
        let yaml = assemble_compose(&sel, &VersionSet::default());

        assert!(yaml.contains("services:"));
        assert!(yaml.contains("mailpit:"));
        assert!(yaml.contains("image: axllent/mailpit:latest"));
        assert!(yaml.contains("- \"1025:1025\""));
        assert!(yaml.contains("- \"8025:8025\""));
        assert!(yaml.contains("MP_SMTP_AUTH_ACCEPT_ANY: \"1\""));
        assert!(!yaml.contains("db-"));
        assert!(!yaml.contains("volumes:"));
    }

    #[test]
    fn php_app_depends_on_every_database_health() {
        let mut sel = selection(StackKind::Laravel);
        sel.databases = vec![DatabaseKind::Mysql, DatabaseKind::Redis];
        let yaml = assemble_compose(&sel, &VersionSet::default());

        assert!(yaml.contains("  app:"));
        assert!(yaml.contains("- \"8000:80\""));
        assert!(yaml.contains("depends_on:"));
        assert!(yaml.contains("      db-mysql:"));
        assert!(yaml.contains("      redis:"));
        assert_eq!(yaml.matches("condition: service_healthy").count(), 2);
        assert!(!yaml.contains("condition: service_started"));
    }

    #[test]
    fn laravel_watch_syncs_its_source_layout() {
        let sel = selection(StackKind::Laravel);
        let yaml = assemble_compose(&sel, &VersionSet::default());

        for path in ["./app", "./resources", "./routes", "./config"] {
            assert!(yaml.contains(&format!("path: {path}")), "missing sync for {path}");
        }
        assert_eq!(yaml.matches("action: rebuild").count(), 1);
        assert!(yaml.contains("path: ./composer.json"));
    }

    #[test]
    fn symfony_watch_differs_from_laravel() {
        let yaml = assemble_compose(&selection(StackKind::Symfony), &VersionSet::default());
        assert!(yaml.contains("path: ./src"));
        assert!(yaml.contains("path: ./templates"));
        assert!(!yaml.contains("path: ./resources"));
    }

    #[test]
    fn php_with_no_databases_still_has_app_block() {
        let mut sel = selection(StackKind::Symfony);
        sel.services.push(ServiceKind::Mailpit);
        let yaml = assemble_compose(&sel, &VersionSet::default());

        assert!(yaml.contains("  app:"));
        assert!(yaml.contains("mailpit:"));
        assert!(!yaml.contains("depends_on:"));
        assert!(!yaml.contains("db-postgres"));
    }

    #[test]
    fn named_volumes_are_declared_exactly_once_each() {
        let mut sel = selection(StackKind::Symfony);
        sel.databases = vec![DatabaseKind::Postgresql, DatabaseKind::Mysql];
        sel.services = vec![ServiceKind::Minio];
        let yaml = assemble_compose(&sel, &VersionSet::default());

        let (_, volumes) = yaml.rsplit_once("\nvolumes:\n").expect("volumes section");
        assert_eq!(volumes.matches("postgres-data:").count(), 1);
        assert_eq!(volumes.matches("mysql-data:").count(), 1);
        assert_eq!(volumes.matches("minio-data:").count(), 1);
    }

    #[test]
    fn volume_order_follows_selection_order() {
        let mut sel = selection(StackKind::Nextjs);
        sel.databases = vec![DatabaseKind::Mysql, DatabaseKind::Postgresql];
        let yaml = assemble_compose(&sel, &VersionSet::default());

        let volumes = yaml.rsplit_once("\nvolumes:\n").unwrap().1;
        let mysql_at = volumes.find("mysql-data").unwrap();
        let postgres_at = volumes.find("postgres-data").unwrap();
        assert!(mysql_at < postgres_at);
    }
}
