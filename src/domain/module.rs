use std::fmt;

use serde::{Deserialize, Serialize};

/// Optional feature modules: stack-aware bundles of scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    Auth,
    Crud,
    Admin,
    FileUpload,
    Email,
    ApiDocs,
    I18n,
    DarkMode,
    CiCd,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 9] = [
        ModuleKind::Auth,
        ModuleKind::Crud,
        ModuleKind::Admin,
        ModuleKind::FileUpload,
        ModuleKind::Email,
        ModuleKind::ApiDocs,
        ModuleKind::I18n,
        ModuleKind::DarkMode,
        ModuleKind::CiCd,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ModuleKind::Auth => "auth",
            ModuleKind::Crud => "crud",
            ModuleKind::Admin => "admin",
            ModuleKind::FileUpload => "file-upload",
            ModuleKind::Email => "email",
            ModuleKind::ApiDocs => "api-docs",
            ModuleKind::I18n => "i18n",
            ModuleKind::DarkMode => "dark-mode",
            ModuleKind::CiCd => "ci-cd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModuleKind::Auth => "Authentication",
            ModuleKind::Crud => "CRUD API",
            ModuleKind::Admin => "Admin Dashboard",
            ModuleKind::FileUpload => "File Upload",
            ModuleKind::Email => "Transactional Email",
            ModuleKind::ApiDocs => "API Documentation",
            ModuleKind::I18n => "Internationalization",
            ModuleKind::DarkMode => "Dark Mode",
            ModuleKind::CiCd => "CI/CD",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ModuleKind> {
        ModuleKind::ALL.into_iter().find(|m| m.slug() == slug)
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// How the auth module issues credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthStrategy {
    Jwt,
    Session,
}

impl AuthStrategy {
    pub fn slug(&self) -> &'static str {
        match self {
            AuthStrategy::Jwt => "jwt",
            AuthStrategy::Session => "session",
        }
    }

    pub fn from_slug(slug: &str) -> Option<AuthStrategy> {
        match slug {
            "jwt" => Some(AuthStrategy::Jwt),
            "session" => Some(AuthStrategy::Session),
            _ => None,
        }
    }
}
