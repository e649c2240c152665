//! Module dependency expansion.
//!
//! `expand_modules` and `expand_services` are total, monotonic, and
//! idempotent: output always contains the input, and re-expanding an already
//! expanded set changes nothing. Expansion iterates to a fixed point rather
//! than assuming the dependency table stays depth-1.

use crate::domain::{ModuleKind, ServiceKind, StackKind};

/// Static description of one feature module.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    pub kind: ModuleKind,
    pub label: &'static str,
    pub description: &'static str,
    pub supported_stacks: &'static [StackKind],
    pub requires_database: bool,
    pub requires_services: &'static [ServiceKind],
    pub depends_on: &'static [ModuleKind],
}

const ALL_STACKS: &[StackKind] = &StackKind::ALL;

const BACKEND_STACKS: &[StackKind] = &[
    StackKind::Express,
    StackKind::Nextjs,
    StackKind::Nuxt,
    StackKind::ViteReactExpress,
    StackKind::Symfony,
    StackKind::Laravel,
];

const UI_STACKS: &[StackKind] = &[
    StackKind::Nextjs,
    StackKind::ViteReact,
    StackKind::Nuxt,
    StackKind::ViteReactExpress,
    StackKind::Symfony,
    StackKind::Laravel,
];

const FRONTEND_JS_STACKS: &[StackKind] =
    &[StackKind::Nextjs, StackKind::ViteReact, StackKind::Nuxt, StackKind::ViteReactExpress];

/// Look up the static descriptor for a module. Total over `ModuleKind`.
pub fn describe_module(module: ModuleKind) -> ModuleDescriptor {
    match module {
        ModuleKind::Auth => ModuleDescriptor {
            kind: module,
            label: "Authentication",
            description: "Login, register, logout with JWT or session",
            supported_stacks: ALL_STACKS,
            requires_database: true,
            requires_services: &[],
            depends_on: &[],
        },
        ModuleKind::Crud => ModuleDescriptor {
            kind: module,
            label: "CRUD API",
            description: "Model + endpoints example (items)",
            supported_stacks: BACKEND_STACKS,
            requires_database: true,
            requires_services: &[],
            depends_on: &[],
        },
        ModuleKind::Admin => ModuleDescriptor {
            kind: module,
            label: "Admin Dashboard",
            description: "Sidebar, stats, user management",
            supported_stacks: UI_STACKS,
            requires_database: false,
            requires_services: &[],
            depends_on: &[ModuleKind::Auth],
        },
        ModuleKind::FileUpload => ModuleDescriptor {
            kind: module,
            label: "File Upload",
            description: "S3/MinIO file upload integration",
            supported_stacks: BACKEND_STACKS,
            requires_database: false,
            requires_services: &[ServiceKind::Minio],
            depends_on: &[],
        },
        ModuleKind::Email => ModuleDescriptor {
            kind: module,
            label: "Transactional Email",
            description: "Email sending with templates (Mailpit)",
            supported_stacks: BACKEND_STACKS,
            requires_database: false,
            requires_services: &[ServiceKind::Mailpit],
            depends_on: &[],
        },
        ModuleKind::ApiDocs => ModuleDescriptor {
            kind: module,
            label: "API Documentation",
            description: "Swagger/OpenAPI auto-generated docs",
            supported_stacks: BACKEND_STACKS,
            requires_database: false,
            requires_services: &[],
            depends_on: &[],
        },
        ModuleKind::I18n => ModuleDescriptor {
            kind: module,
            label: "Internationalization",
            description: "Multi-language support (en + fr)",
            supported_stacks: ALL_STACKS,
            requires_database: false,
            requires_services: &[],
            depends_on: &[],
        },
        ModuleKind::DarkMode => ModuleDescriptor {
            kind: module,
            label: "Dark Mode",
            description: "Theme toggle with system preference",
            supported_stacks: FRONTEND_JS_STACKS,
            requires_database: false,
            requires_services: &[],
            depends_on: &[],
        },
        ModuleKind::CiCd => ModuleDescriptor {
            kind: module,
            label: "CI/CD",
            description: "GitHub Actions workflows (lint, test, build)",
            supported_stacks: ALL_STACKS,
            requires_database: false,
            requires_services: &[],
            depends_on: &[],
        },
    }
}

/// Modules selectable for a given stack, in canonical order.
pub fn modules_for_stack(stack: StackKind) -> Vec<ModuleDescriptor> {
    ModuleKind::ALL
        .into_iter()
        .map(describe_module)
        .filter(|m| m.supported_stacks.contains(&stack))
        .collect()
}

/// Expand a module selection to include every statically required module.
///
/// Requested order is preserved; pulled-in dependencies are appended in the
/// order they are discovered. Duplicates never appear.
pub fn expand_modules(requested: &[ModuleKind]) -> Vec<ModuleKind> {
    let mut resolved: Vec<ModuleKind> = Vec::new();
    for module in requested {
        if !resolved.contains(module) {
            resolved.push(*module);
        }
    }

    // Fixed-point iteration; the enum is finite so this terminates even if
    // the dependency table ever gains depth.
    loop {
        let mut added = false;
        for idx in 0..resolved.len() {
            let module = resolved[idx];
            for dep in describe_module(module).depends_on {
                if !resolved.contains(dep) {
                    resolved.push(*dep);
                    added = true;
                }
            }
        }
        if !added {
            break;
        }
    }

    resolved
}

/// Expand a service selection with every service the resolved modules require.
pub fn expand_services(
    resolved_modules: &[ModuleKind],
    requested_services: &[ServiceKind],
) -> Vec<ServiceKind> {
    let mut resolved: Vec<ServiceKind> = Vec::new();
    for service in requested_services {
        if !resolved.contains(service) {
            resolved.push(*service);
        }
    }

    for module in resolved_modules {
        for service in describe_module(*module).requires_services {
            if !resolved.contains(service) {
                resolved.push(*service);
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn admin_pulls_in_auth() {
        let resolved = expand_modules(&[ModuleKind::Admin]);
        assert_eq!(resolved, vec![ModuleKind::Admin, ModuleKind::Auth]);
    }

    #[test]
    fn auth_appears_exactly_once_when_both_selected() {
        let resolved = expand_modules(&[ModuleKind::Auth, ModuleKind::Admin]);
        assert_eq!(resolved.iter().filter(|m| **m == ModuleKind::Auth).count(), 1);
        assert_eq!(resolved.iter().filter(|m| **m == ModuleKind::Admin).count(), 1);
    }

    #[test]
    fn file_upload_requires_minio() {
        let modules = expand_modules(&[ModuleKind::FileUpload]);
        let services = expand_services(&modules, &[]);
        assert!(services.contains(&ServiceKind::Minio));
    }

    #[test]
    fn email_requires_mailpit_without_duplicating_it() {
        let modules = expand_modules(&[ModuleKind::Email]);
        let services = expand_services(&modules, &[ServiceKind::Mailpit]);
        assert_eq!(services, vec![ServiceKind::Mailpit]);
    }

    #[test]
    fn dark_mode_is_frontend_only() {
        let desc = describe_module(ModuleKind::DarkMode);
        assert!(!desc.supported_stacks.contains(&StackKind::Express));
        assert!(!desc.supported_stacks.contains(&StackKind::Symfony));
        assert!(desc.supported_stacks.contains(&StackKind::Nextjs));
    }

    fn arb_modules() -> impl Strategy<Value = Vec<ModuleKind>> {
        proptest::collection::vec(
            proptest::sample::select(ModuleKind::ALL.to_vec()),
            0..ModuleKind::ALL.len(),
        )
    }

    fn arb_services() -> impl Strategy<Value = Vec<ServiceKind>> {
        proptest::collection::vec(
            proptest::sample::select(ServiceKind::ALL.to_vec()),
            0..ServiceKind::ALL.len(),
        )
    }

    proptest! {
        #[test]
        fn expansion_is_idempotent(requested in arb_modules()) {
            let once = expand_modules(&requested);
            let twice = expand_modules(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn expansion_is_monotonic(requested in arb_modules()) {
            let resolved = expand_modules(&requested);
            for module in &requested {
                prop_assert!(resolved.contains(module));
            }
        }

        #[test]
        fn service_expansion_is_idempotent(modules in arb_modules(), services in arb_services()) {
            let resolved_modules = expand_modules(&modules);
            let once = expand_services(&resolved_modules, &services);
            let twice = expand_services(&resolved_modules, &once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn service_expansion_is_monotonic(modules in arb_modules(), services in arb_services()) {
            let resolved = expand_services(&expand_modules(&modules), &services);
            for service in &services {
                prop_assert!(resolved.contains(service));
            }
        }

        #[test]
        fn expansion_never_duplicates(requested in arb_modules()) {
            let resolved = expand_modules(&requested);
            let mut sorted = resolved.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(resolved.len(), sorted.len());
        }
    }
}
