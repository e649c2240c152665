use std::fmt;

use serde::{Deserialize, Serialize};

/// Selectable database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatabaseKind {
    Postgresql,
    Mongodb,
    Mysql,
    Redis,
    Sqlite,
}

impl DatabaseKind {
    /// All database kinds in prompt order.
    pub const ALL: [DatabaseKind; 5] = [
        DatabaseKind::Postgresql,
        DatabaseKind::Mongodb,
        DatabaseKind::Mysql,
        DatabaseKind::Redis,
        DatabaseKind::Sqlite,
    ];

    /// Databases usable as a Prisma provider.
    ///
    /// MongoDB is supported by Prisma upstream but with limitations, so it is
    /// excluded here. Priority order matters: see `primary_prisma_provider`.
    pub const PRISMA_COMPATIBLE: [DatabaseKind; 3] =
        [DatabaseKind::Postgresql, DatabaseKind::Mysql, DatabaseKind::Sqlite];

    pub fn slug(&self) -> &'static str {
        match self {
            DatabaseKind::Postgresql => "postgresql",
            DatabaseKind::Mongodb => "mongodb",
            DatabaseKind::Mysql => "mysql",
            DatabaseKind::Redis => "redis",
            DatabaseKind::Sqlite => "sqlite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatabaseKind::Postgresql => "PostgreSQL",
            DatabaseKind::Mongodb => "MongoDB",
            DatabaseKind::Mysql => "MySQL",
            DatabaseKind::Redis => "Redis",
            DatabaseKind::Sqlite => "SQLite",
        }
    }

    pub fn from_slug(slug: &str) -> Option<DatabaseKind> {
        DatabaseKind::ALL.into_iter().find(|d| d.slug() == slug)
    }

    /// Canonical compose service name. Differs from the slug for most kinds.
    pub fn container_name(&self) -> &'static str {
        match self {
            DatabaseKind::Postgresql => "db-postgres",
            DatabaseKind::Mongodb => "db-mongo",
            DatabaseKind::Mysql => "db-mysql",
            DatabaseKind::Redis => "redis",
            // File-based, never containerized; resolves to the loopback name.
            DatabaseKind::Sqlite => "localhost",
        }
    }

    /// Whether this kind has a containerized form at all.
    pub fn is_containerized(&self) -> bool {
        !matches!(self, DatabaseKind::Sqlite)
    }

    pub fn is_prisma_compatible(&self) -> bool {
        DatabaseKind::PRISMA_COMPATIBLE.contains(self)
    }

    /// Prisma provider for a database selection.
    ///
    /// Priority: postgresql > mysql > sqlite.
    pub fn primary_prisma_provider(databases: &[DatabaseKind]) -> Option<DatabaseKind> {
        DatabaseKind::PRISMA_COMPATIBLE.into_iter().find(|p| databases.contains(p))
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_roundtrip() {
        for db in DatabaseKind::ALL {
            assert_eq!(DatabaseKind::from_slug(db.slug()), Some(db));
        }
    }

    #[test]
    fn sqlite_is_the_only_file_based_kind() {
        assert!(!DatabaseKind::Sqlite.is_containerized());
        for db in [
            DatabaseKind::Postgresql,
            DatabaseKind::Mongodb,
            DatabaseKind::Mysql,
            DatabaseKind::Redis,
        ] {
            assert!(db.is_containerized());
        }
    }

    #[test]
    fn prisma_provider_priority_is_postgres_mysql_sqlite() {
        let all = vec![DatabaseKind::Sqlite, DatabaseKind::Mysql, DatabaseKind::Postgresql];
        assert_eq!(
            DatabaseKind::primary_prisma_provider(&all),
            Some(DatabaseKind::Postgresql)
        );
        assert_eq!(
            DatabaseKind::primary_prisma_provider(&[DatabaseKind::Sqlite, DatabaseKind::Mysql]),
            Some(DatabaseKind::Mysql)
        );
        assert_eq!(
            DatabaseKind::primary_prisma_provider(&[DatabaseKind::Mongodb]),
            None
        );
    }

    #[test]
    fn container_name_differs_from_slug_for_postgres() {
        assert_eq!(DatabaseKind::Postgresql.container_name(), "db-postgres");
        assert_eq!(DatabaseKind::Redis.container_name(), "redis");
    }
}
