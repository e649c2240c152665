use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the generated application itself runs inside Docker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackCategory {
    /// App process runs on the host; only databases/services are containerized.
    Js,
    /// App process runs in a container alongside its infrastructure.
    Php,
}

/// The selectable framework stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackKind {
    Nextjs,
    ViteReact,
    Nuxt,
    ViteReactExpress,
    Express,
    Symfony,
    Laravel,
}

impl StackKind {
    /// All available stacks in prompt order.
    pub const ALL: [StackKind; 7] = [
        StackKind::Nextjs,
        StackKind::ViteReact,
        StackKind::Nuxt,
        StackKind::ViteReactExpress,
        StackKind::Express,
        StackKind::Symfony,
        StackKind::Laravel,
    ];

    /// Stable identifier used in flags, templates, and the registry.
    pub fn slug(&self) -> &'static str {
        match self {
            StackKind::Nextjs => "nextjs",
            StackKind::ViteReact => "vite-react",
            StackKind::Nuxt => "nuxt",
            StackKind::ViteReactExpress => "vite-react-express",
            StackKind::Express => "express",
            StackKind::Symfony => "symfony",
            StackKind::Laravel => "laravel",
        }
    }

    /// Human-readable display name.
    pub fn label(&self) -> &'static str {
        match self {
            StackKind::Nextjs => "Next.js",
            StackKind::ViteReact => "Vite + React",
            StackKind::Nuxt => "Nuxt",
            StackKind::ViteReactExpress => "Vite + React + Express",
            StackKind::Express => "Express",
            StackKind::Symfony => "Symfony",
            StackKind::Laravel => "Laravel",
        }
    }

    /// One-line description used by the generated assistant guide.
    pub fn description(&self) -> &'static str {
        match self {
            StackKind::Nextjs => "Full-stack web application (Next.js + React)",
            StackKind::ViteReact => "Single-page application (Vite + React)",
            StackKind::Nuxt => "Full-stack web application (Nuxt + Vue)",
            StackKind::ViteReactExpress => "Full-stack web application (Vite + React + Express)",
            StackKind::Express => "Backend API (Express.js)",
            StackKind::Symfony => "Full-stack PHP application (Symfony)",
            StackKind::Laravel => "Full-stack PHP application (Laravel)",
        }
    }

    /// Parse a stack from its slug.
    pub fn from_slug(slug: &str) -> Option<StackKind> {
        StackKind::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Default development port published by the generated project.
    pub fn default_port(&self) -> u16 {
        match self {
            StackKind::Nextjs | StackKind::Nuxt => 3000,
            StackKind::ViteReact => 5173,
            StackKind::ViteReactExpress | StackKind::Express => 4000,
            StackKind::Symfony | StackKind::Laravel => 8000,
        }
    }

    /// Containerization category of this stack.
    pub fn category(&self) -> StackCategory {
        match self {
            StackKind::Nextjs
            | StackKind::ViteReact
            | StackKind::Nuxt
            | StackKind::ViteReactExpress
            | StackKind::Express => StackCategory::Js,
            StackKind::Symfony | StackKind::Laravel => StackCategory::Php,
        }
    }

    pub fn is_js(&self) -> bool {
        self.category() == StackCategory::Js
    }

    pub fn is_php(&self) -> bool {
        self.category() == StackCategory::Php
    }

    /// Stacks that ship browser UI scaffolding (Tailwind, components).
    pub fn is_frontend(&self) -> bool {
        matches!(
            self,
            StackKind::Nextjs | StackKind::ViteReact | StackKind::Nuxt | StackKind::ViteReactExpress
        )
    }

    /// For the composite stack: the sub-stacks generated under `client/` and `server/`.
    pub fn sub_stacks(&self) -> Option<(StackKind, StackKind)> {
        match self {
            StackKind::ViteReactExpress => Some((StackKind::ViteReact, StackKind::Express)),
            _ => None,
        }
    }
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
