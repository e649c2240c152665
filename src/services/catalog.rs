//! Static descriptor tables for databases and auxiliary services.
//!
//! Lookups are pure and deterministic: the same kind, project name, and
//! version set always produce the same descriptor. Every literal here ends up
//! verbatim in generated compose files, so tests assert on exact strings.

use crate::domain::{DatabaseKind, ServiceKind, VersionSet};

/// Container healthcheck definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Healthcheck {
    pub test: &'static str,
    pub interval: &'static str,
    pub timeout: &'static str,
    pub retries: u32,
}

/// One infrastructure dependency as it appears in the compose topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub service_name: &'static str,
    pub image: String,
    pub ports: Vec<&'static str>,
    pub environment: Vec<(&'static str, String)>,
    pub volumes: Vec<&'static str>,
    pub command: Option<&'static str>,
    pub healthcheck: Option<Healthcheck>,
}

/// Describe the container for a selected database.
///
/// Returns `None` for SQLite, which is file-based and has no container form.
/// The database/schema name is the project name with hyphens replaced by
/// underscores.
pub fn describe_database(
    db: DatabaseKind,
    project_name: &str,
    versions: &VersionSet,
) -> Option<ServiceDescriptor> {
    let db_name = project_name.replace('-', "_");

    let descriptor = match db {
        DatabaseKind::Postgresql => ServiceDescriptor {
            service_name: "db-postgres",
            image: format!("postgres:{}-alpine", versions.databases.postgresql),
            ports: vec!["5432:5432"],
            environment: vec![
                ("POSTGRES_USER", "postgres".to_string()),
                ("POSTGRES_PASSWORD", "postgres".to_string()),
                ("POSTGRES_DB", db_name),
            ],
            volumes: vec!["postgres-data:/var/lib/postgresql/data"],
            command: None,
            healthcheck: Some(Healthcheck {
                test: "pg_isready -U postgres",
                interval: "10s",
                timeout: "5s",
                retries: 5,
            }),
        },
        DatabaseKind::Mongodb => ServiceDescriptor {
            service_name: "db-mongo",
            image: format!("mongo:{}", versions.databases.mongodb),
            ports: vec!["27017:27017"],
            environment: vec![],
            volumes: vec!["mongo-data:/data/db"],
            command: None,
            healthcheck: Some(Healthcheck {
                test: "mongosh --eval \\\"db.adminCommand('ping')\\\"",
                interval: "10s",
                timeout: "5s",
                retries: 5,
            }),
        },
        DatabaseKind::Mysql => ServiceDescriptor {
            service_name: "db-mysql",
            image: format!("mysql:{}", versions.databases.mysql),
            ports: vec!["3306:3306"],
            environment: vec![
                ("MYSQL_ROOT_PASSWORD", "root".to_string()),
                ("MYSQL_DATABASE", db_name),
            ],
            volumes: vec!["mysql-data:/var/lib/mysql"],
            command: None,
            healthcheck: Some(Healthcheck {
                test: "mysqladmin ping -h localhost",
                interval: "10s",
                timeout: "5s",
                retries: 5,
            }),
        },
        DatabaseKind::Redis => ServiceDescriptor {
            service_name: "redis",
            image: format!("redis:{}-alpine", versions.databases.redis),
            ports: vec!["6379:6379"],
            environment: vec![],
            volumes: vec!["redis-data:/data"],
            command: None,
            healthcheck: Some(Healthcheck {
                test: "redis-cli ping",
                interval: "10s",
                timeout: "5s",
                retries: 5,
            }),
        },
        DatabaseKind::Sqlite => return None,
    };

    Some(descriptor)
}

/// Describe the container for an auxiliary service. Total over `ServiceKind`.
pub fn describe_service(service: ServiceKind) -> ServiceDescriptor {
    match service {
        ServiceKind::Mailpit => ServiceDescriptor {
            service_name: "mailpit",
            image: "axllent/mailpit:latest".to_string(),
            ports: vec!["1025:1025", "8025:8025"],
            environment: vec![
                ("MP_SMTP_AUTH_ACCEPT_ANY", "1".to_string()),
                ("MP_SMTP_AUTH_ALLOW_INSECURE", "1".to_string()),
            ],
            volumes: vec![],
            command: None,
            healthcheck: None,
        },
        ServiceKind::Minio => ServiceDescriptor {
            service_name: "minio",
            image: "minio/minio:latest".to_string(),
            ports: vec!["9000:9000", "9001:9001"],
            environment: vec![
                ("MINIO_ROOT_USER", "minioadmin".to_string()),
                ("MINIO_ROOT_PASSWORD", "minioadmin".to_string()),
            ],
            volumes: vec!["minio-data:/data"],
            command: Some("server /data --console-address \":9001\""),
            healthcheck: None,
        },
        ServiceKind::Rabbitmq => ServiceDescriptor {
            service_name: "rabbitmq",
            image: "rabbitmq:4-management-alpine".to_string(),
            ports: vec!["5672:5672", "15672:15672"],
            environment: vec![
                ("RABBITMQ_DEFAULT_USER", "guest".to_string()),
                ("RABBITMQ_DEFAULT_PASSWORD", "guest".to_string()),
            ],
            volumes: vec!["rabbitmq-data:/var/lib/rabbitmq"],
            command: None,
            healthcheck: None,
        },
        ServiceKind::Adminer => ServiceDescriptor {
            service_name: "adminer",
            image: "adminer:latest".to_string(),
            ports: vec!["8080:8080"],
            environment: vec![],
            volumes: vec![],
            command: None,
            healthcheck: None,
        },
    }
}
