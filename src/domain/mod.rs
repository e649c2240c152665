pub mod database;
pub mod error;
pub mod hosts;
pub mod module;
pub mod orm;
pub mod selection;
pub mod service;
pub mod stack;
pub mod versions;

pub use database::DatabaseKind;
pub use error::AppError;
pub use hosts::{HostMap, resolve_database_host, resolve_service_host};
pub use module::{AuthStrategy, ModuleKind};
pub use orm::OrmKind;
pub use selection::{ProjectSelection, validate_project_name};
pub use service::ServiceKind;
pub use stack::{StackCategory, StackKind};
pub use versions::VersionSet;
