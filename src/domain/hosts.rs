//! Hostname resolution for generated artifacts.
//!
//! Every artifact that mentions a database or service host (env files, the
//! assistant guide, connection strings) must agree on the hostname. The rule
//! is category-determined: locally-run stacks reach containers through the
//! loopback name, fully containerized stacks use the compose service name.

use std::collections::BTreeMap;

use crate::domain::{DatabaseKind, ProjectSelection, ServiceKind, StackCategory, StackKind};

const LOOPBACK: &str = "localhost";

/// Hostname a generated artifact should use for a database.
pub fn resolve_database_host(stack: StackKind, db: DatabaseKind) -> &'static str {
    match stack.category() {
        StackCategory::Js => LOOPBACK,
        StackCategory::Php => db.container_name(),
    }
}

/// Hostname a generated artifact should use for an auxiliary service.
pub fn resolve_service_host(stack: StackKind, service: ServiceKind) -> &'static str {
    match stack.category() {
        StackCategory::Js => LOOPBACK,
        StackCategory::Php => service.container_name(),
    }
}

/// Per-project host lookup table, built once and threaded through rendering.
///
/// Templates consult this map instead of re-deriving hostnames ad hoc, so one
/// project can never mix hostnames for the same service.
#[derive(Debug, Clone, Default)]
pub struct HostMap {
    databases: BTreeMap<&'static str, &'static str>,
    services: BTreeMap<&'static str, &'static str>,
}

impl HostMap {
    /// Build the host table for a resolved selection.
    pub fn resolve(selection: &ProjectSelection) -> Self {
        let mut map = HostMap::default();
        for db in &selection.databases {
            map.databases.insert(db.slug(), resolve_database_host(selection.stack, *db));
        }
        for service in &selection.services {
            map.services.insert(service.slug(), resolve_service_host(selection.stack, *service));
        }
        map
    }

    pub fn database(&self, db: DatabaseKind) -> Option<&'static str> {
        self.databases.get(db.slug()).copied()
    }

    pub fn service(&self, service: ServiceKind) -> Option<&'static str> {
        self.services.get(service.slug()).copied()
    }

    /// Slug → hostname view for the template context.
    pub fn database_entries(&self) -> &BTreeMap<&'static str, &'static str> {
        &self.databases
    }

    /// Slug → hostname view for the template context.
    pub fn service_entries(&self) -> &BTreeMap<&'static str, &'static str> {
        &self.services
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_stacks_always_resolve_to_loopback() {
        for stack in StackKind::ALL.into_iter().filter(StackKind::is_js) {
            for db in DatabaseKind::ALL {
                assert_eq!(resolve_database_host(stack, db), "localhost");
            }
            for svc in ServiceKind::ALL {
                assert_eq!(resolve_service_host(stack, svc), "localhost");
            }
        }
    }

    #[test]
    fn php_stacks_resolve_to_container_names() {
        assert_eq!(resolve_database_host(StackKind::Symfony, DatabaseKind::Postgresql), "db-postgres");
        assert_eq!(resolve_database_host(StackKind::Laravel, DatabaseKind::Redis), "redis");
        assert_eq!(resolve_service_host(StackKind::Symfony, ServiceKind::Mailpit), "mailpit");
    }

    #[test]
    fn resolution_depends_only_on_category() {
        for db in DatabaseKind::ALL {
            assert_eq!(
                resolve_database_host(StackKind::Nextjs, db),
                resolve_database_host(StackKind::Express, db)
            );
            assert_eq!(
                resolve_database_host(StackKind::Symfony, db),
                resolve_database_host(StackKind::Laravel, db)
            );
        }
    }
}
