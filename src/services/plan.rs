//! Template composition: decides which templates render where.
//!
//! Given a resolved selection, `build_render_plan` produces the ordered list
//! of (template, output path, prerequisite directories) triples covering the
//! shared baseline, container files, ORM scaffolding, stack scaffolding, and
//! per-module scaffolding. The composite stack merges the plans of its two
//! sub-stacks under `client/` and `server/` path prefixes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{
    DatabaseKind, HostMap, ModuleKind, OrmKind, ProjectSelection, ServiceKind, StackKind,
    VersionSet,
};

/// One planned render: which template, where it lands, what must exist first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlanEntry {
    /// Template reference inside the template store.
    pub template: String,
    /// Output path relative to the project root.
    pub output: String,
    /// Directories (relative to the project root) to create before rendering.
    pub dirs: Vec<String>,
}

impl RenderPlanEntry {
    fn new(template: &str, output: &str) -> Self {
        Self { template: template.to_string(), output: output.to_string(), dirs: Vec::new() }
    }

    fn with_dirs(template: &str, output: &str, dirs: &[&str]) -> Self {
        Self {
            template: template.to_string(),
            output: output.to_string(),
            dirs: dirs.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Rebase this entry under a subtree root (composite stack delegation).
    fn prefixed(mut self, root: &str) -> Self {
        self.output = format!("{root}/{}", self.output);
        self.dirs = self.dirs.iter().map(|d| format!("{root}/{d}")).collect();
        self
    }

    /// All directories that must exist before this entry renders: declared
    /// prerequisites plus the direct parent of the output path.
    pub fn required_dirs(&self) -> Vec<String> {
        let mut dirs = self.dirs.clone();
        if let Some((parent, _)) = self.output.rsplit_once('/') {
            let parent = parent.to_string();
            if !dirs.contains(&parent) {
                dirs.push(parent);
            }
        }
        dirs
    }
}

/// The full plan for one generation, grouped by materialization state.
#[derive(Debug, Clone, Default)]
pub struct RenderPlan {
    pub shared: Vec<RenderPlanEntry>,
    pub container: Vec<RenderPlanEntry>,
    pub orm: Vec<RenderPlanEntry>,
    pub stack: Vec<RenderPlanEntry>,
    pub modules: Vec<RenderPlanEntry>,
    pub docs: Vec<RenderPlanEntry>,
}

impl RenderPlan {
    /// Every entry in materialization order.
    pub fn entries(&self) -> impl Iterator<Item = &RenderPlanEntry> {
        self.shared
            .iter()
            .chain(&self.container)
            .chain(&self.orm)
            .chain(&self.stack)
            .chain(&self.modules)
            .chain(&self.docs)
    }
}

/// Compute the render plan for a resolved selection.
pub fn build_render_plan(selection: &ProjectSelection) -> RenderPlan {
    let mut plan = RenderPlan::default();
    let has_db = !selection.databases.is_empty();

    // Shared baseline, always present.
    plan.shared.push(RenderPlanEntry::new("shared/gitignore.j2", ".gitignore"));
    plan.shared.push(RenderPlanEntry::new("shared/env.j2", ".env"));
    plan.shared.push(RenderPlanEntry::new("shared/env.example.j2", ".env.example"));
    plan.shared.push(RenderPlanEntry::new("shared/dockerignore.j2", ".dockerignore"));

    if selection.eslint_prettier && selection.stack.is_js() {
        plan.shared.push(RenderPlanEntry::new("shared/eslint.config.js.j2", "eslint.config.js"));
        plan.shared.push(RenderPlanEntry::new("shared/prettierrc.j2", ".prettierrc"));
    }

    // Container build file. The compose document itself is assembled by
    // `services::compose`, not rendered from a template.
    if selection.needs_docker() {
        plan.container.push(RenderPlanEntry::new(
            &format!("{}/Dockerfile.j2", selection.stack.slug()),
            "Dockerfile",
        ));
    }

    // Prisma scaffolding; lands under server/ for the composite stack.
    if let Some(_provider) = selection.prisma_provider() {
        let base = match selection.stack {
            StackKind::ViteReactExpress => "server/prisma",
            _ => "prisma",
        };
        plan.orm.push(RenderPlanEntry::with_dirs(
            "shared/prisma/schema.prisma.j2",
            &format!("{base}/schema.prisma"),
            &[base],
        ));
        plan.orm.push(RenderPlanEntry::with_dirs(
            "shared/prisma/seed.ts.j2",
            &format!("{base}/seed.ts"),
            &[base],
        ));
    }

    plan.stack = stack_entries(selection.stack, has_db);

    for module in &selection.modules {
        plan.modules.extend(module_entries(*module, selection.stack));
    }

    // README is template-rendered; the assistant guide (agent.md) is
    // assembled in code by `services::guide`.
    plan.docs.push(RenderPlanEntry::new("shared/README.md.j2", "README.md"));

    plan
}

/// Fixed template list for one stack kind. The database helper file is only
/// included when at least one database is selected.
fn stack_entries(stack: StackKind, has_db: bool) -> Vec<RenderPlanEntry> {
    match stack {
        StackKind::Nextjs => {
            let mut entries = vec![
                RenderPlanEntry::with_dirs("nextjs/package.json.j2", "package.json", &["public"]),
                RenderPlanEntry::new("nextjs/tsconfig.json.j2", "tsconfig.json"),
                RenderPlanEntry::new("nextjs/next.config.js.j2", "next.config.js"),
                RenderPlanEntry::new("nextjs/postcss.config.js.j2", "postcss.config.js"),
                RenderPlanEntry::with_dirs(
                    "nextjs/src/app/layout.tsx.j2",
                    "src/app/layout.tsx",
                    &["src/app"],
                ),
                RenderPlanEntry::new("nextjs/src/app/page.tsx.j2", "src/app/page.tsx"),
                RenderPlanEntry::new("nextjs/src/app/globals.css.j2", "src/app/globals.css"),
            ];
            if has_db {
                entries.push(RenderPlanEntry::with_dirs(
                    "nextjs/src/lib/db.ts.j2",
                    "src/lib/db.ts",
                    &["src/lib"],
                ));
            }
            entries
        }
        StackKind::ViteReact => vec![
            RenderPlanEntry::with_dirs("vite-react/package.json.j2", "package.json", &["public"]),
            RenderPlanEntry::new("vite-react/vite.config.ts.j2", "vite.config.ts"),
            RenderPlanEntry::new("vite-react/tsconfig.json.j2", "tsconfig.json"),
            RenderPlanEntry::new("vite-react/index.html.j2", "index.html"),
            RenderPlanEntry::with_dirs("vite-react/src/main.tsx.j2", "src/main.tsx", &["src"]),
            RenderPlanEntry::new("vite-react/src/App.tsx.j2", "src/App.tsx"),
            RenderPlanEntry::new("vite-react/src/index.css.j2", "src/index.css"),
        ],
        StackKind::Nuxt => {
            let mut entries = vec![
                RenderPlanEntry::with_dirs(
                    "nuxt/package.json.j2",
                    "package.json",
                    &["components", "composables", "public", "server/api"],
                ),
                RenderPlanEntry::new("nuxt/nuxt.config.ts.j2", "nuxt.config.ts"),
                RenderPlanEntry::new("nuxt/tsconfig.json.j2", "tsconfig.json"),
                RenderPlanEntry::new("nuxt/app.vue.j2", "app.vue"),
                RenderPlanEntry::with_dirs("nuxt/pages/index.vue.j2", "pages/index.vue", &["pages"]),
                RenderPlanEntry::with_dirs(
                    "nuxt/server/tsconfig.json.j2",
                    "server/tsconfig.json",
                    &["server"],
                ),
                RenderPlanEntry::with_dirs(
                    "nuxt/assets/css/main.css.j2",
                    "assets/css/main.css",
                    &["assets/css"],
                ),
            ];
            if has_db {
                entries.push(RenderPlanEntry::with_dirs(
                    "nuxt/server/utils/db.ts.j2",
                    "server/utils/db.ts",
                    &["server/utils"],
                ));
            }
            entries
        }
        StackKind::Express => {
            let mut entries = vec![
                RenderPlanEntry::new("express/package.json.j2", "package.json"),
                RenderPlanEntry::new("express/tsconfig.json.j2", "tsconfig.json"),
                RenderPlanEntry::with_dirs("express/src/index.ts.j2", "src/index.ts", &["src"]),
                RenderPlanEntry::with_dirs(
                    "express/src/routes/index.ts.j2",
                    "src/routes/index.ts",
                    &["src/routes"],
                ),
                RenderPlanEntry::new("express/src/routes/health.ts.j2", "src/routes/health.ts"),
                RenderPlanEntry::with_dirs(
                    "express/src/middleware/errorHandler.ts.j2",
                    "src/middleware/errorHandler.ts",
                    &["src/middleware"],
                ),
                RenderPlanEntry::with_dirs(
                    "express/tests/health.test.ts.j2",
                    "tests/health.test.ts",
                    &["tests"],
                ),
            ];
            if has_db {
                entries.push(RenderPlanEntry::with_dirs(
                    "express/src/lib/db.ts.j2",
                    "src/lib/db.ts",
                    &["src/lib"],
                ));
            }
            entries
        }
        StackKind::ViteReactExpress => {
            // Sub-context delegation: render both sub-stacks under their
            // subtree roots, swap in the proxy-enabled vite config, and add
            // the workspace-root manifest.
            let mut entries: Vec<RenderPlanEntry> = stack_entries(StackKind::ViteReact, false)
                .into_iter()
                .map(|entry| {
                    if entry.output == "vite.config.ts" {
                        RenderPlanEntry::new(
                            "vite-react-express/client-vite.config.ts.j2",
                            "vite.config.ts",
                        )
                        .prefixed("client")
                    } else {
                        entry.prefixed("client")
                    }
                })
                .collect();
            entries.extend(
                stack_entries(StackKind::Express, has_db)
                    .into_iter()
                    .map(|entry| entry.prefixed("server")),
            );
            entries.push(RenderPlanEntry::new(
                "vite-react-express/package.json.j2",
                "package.json",
            ));
            entries
        }
        StackKind::Symfony => vec![
            RenderPlanEntry::with_dirs("symfony/Caddyfile.j2", "Caddyfile", &["var"]),
            RenderPlanEntry::new("symfony/composer.json.j2", "composer.json"),
            RenderPlanEntry::with_dirs(
                "symfony/config/packages/doctrine.yaml.j2",
                "config/packages/doctrine.yaml",
                &["config/packages"],
            ),
            RenderPlanEntry::new(
                "symfony/config/packages/framework.yaml.j2",
                "config/packages/framework.yaml",
            ),
            RenderPlanEntry::new("symfony/config/routes.yaml.j2", "config/routes.yaml"),
            RenderPlanEntry::new("symfony/config/bundles.php.j2", "config/bundles.php"),
            RenderPlanEntry::with_dirs("symfony/public/index.php.j2", "public/index.php", &["public"]),
            RenderPlanEntry::with_dirs("symfony/src/Kernel.php.j2", "src/Kernel.php", &["src"]),
            RenderPlanEntry::with_dirs(
                "symfony/src/Controller/HomeController.php.j2",
                "src/Controller/HomeController.php",
                &["src/Controller"],
            ),
            RenderPlanEntry::with_dirs(
                "symfony/src/Entity/User.php.j2",
                "src/Entity/User.php",
                &["src/Entity"],
            ),
        ],
        StackKind::Laravel => vec![
            RenderPlanEntry::with_dirs("laravel/nginx.conf.j2", "nginx.conf", &["storage"]),
            RenderPlanEntry::new("laravel/composer.json.j2", "composer.json"),
            RenderPlanEntry::with_dirs("laravel/config/app.php.j2", "config/app.php", &["config"]),
            RenderPlanEntry::new("laravel/config/database.php.j2", "config/database.php"),
            RenderPlanEntry::with_dirs("laravel/routes/web.php.j2", "routes/web.php", &["routes"]),
            RenderPlanEntry::with_dirs(
                "laravel/app/Providers/AppServiceProvider.php.j2",
                "app/Providers/AppServiceProvider.php",
                &["app/Providers"],
            ),
            RenderPlanEntry::with_dirs(
                "laravel/app/Models/User.php.j2",
                "app/Models/User.php",
                &["app/Models"],
            ),
            RenderPlanEntry::with_dirs(
                "laravel/database/migrations/create_users_table.php.j2",
                "database/migrations/2024_01_01_000000_create_users_table.php",
                &["database/migrations"],
            ),
            RenderPlanEntry::with_dirs(
                "laravel/database/seeders/DatabaseSeeder.php.j2",
                "database/seeders/DatabaseSeeder.php",
                &["database/seeders"],
            ),
            RenderPlanEntry::with_dirs("laravel/bootstrap/app.php.j2", "bootstrap/app.php", &["bootstrap"]),
            RenderPlanEntry::with_dirs("laravel/public/index.php.j2", "public/index.php", &["public"]),
        ],
    }
}

/// Entries registered for a module on one stack. A module with no
/// registration for the stack contributes nothing.
fn module_stack_entries(module: ModuleKind, stack: StackKind) -> Vec<RenderPlanEntry> {
    let table: &[(&str, &str, &[&str])] = match (module, stack) {
        (ModuleKind::Auth, StackKind::Express) => &[
            ("modules/auth/express/src/routes/auth.ts.j2", "src/routes/auth.ts", &[]),
            ("modules/auth/express/src/middleware/auth.ts.j2", "src/middleware/auth.ts", &[]),
            ("modules/auth/express/src/lib/auth.ts.j2", "src/lib/auth.ts", &[]),
        ],
        (ModuleKind::Auth, StackKind::Nextjs) => &[
            ("modules/auth/nextjs/src/app/login/page.tsx.j2", "src/app/login/page.tsx", &["src/app/login"]),
            ("modules/auth/nextjs/src/app/register/page.tsx.j2", "src/app/register/page.tsx", &["src/app/register"]),
            ("modules/auth/nextjs/src/app/api/auth/login/route.ts.j2", "src/app/api/auth/login/route.ts", &["src/app/api/auth/login"]),
            ("modules/auth/nextjs/src/app/api/auth/register/route.ts.j2", "src/app/api/auth/register/route.ts", &["src/app/api/auth/register"]),
            ("modules/auth/nextjs/src/app/api/auth/me/route.ts.j2", "src/app/api/auth/me/route.ts", &["src/app/api/auth/me"]),
            ("modules/auth/nextjs/src/lib/auth.ts.j2", "src/lib/auth.ts", &[]),
        ],
        (ModuleKind::Auth, StackKind::ViteReact) => &[
            ("modules/auth/vite-react/src/pages/Login.tsx.j2", "src/pages/Login.tsx", &["src/pages"]),
            ("modules/auth/vite-react/src/pages/Register.tsx.j2", "src/pages/Register.tsx", &[]),
            ("modules/auth/vite-react/src/hooks/useAuth.ts.j2", "src/hooks/useAuth.ts", &["src/hooks"]),
            ("modules/auth/vite-react/src/lib/auth.ts.j2", "src/lib/auth.ts", &[]),
        ],
        (ModuleKind::Auth, StackKind::Nuxt) => &[
            ("modules/auth/nuxt/pages/login.vue.j2", "pages/login.vue", &["pages"]),
            ("modules/auth/nuxt/pages/register.vue.j2", "pages/register.vue", &[]),
            ("modules/auth/nuxt/server/api/auth/login.post.ts.j2", "server/api/auth/login.post.ts", &["server/api/auth"]),
            ("modules/auth/nuxt/server/api/auth/register.post.ts.j2", "server/api/auth/register.post.ts", &[]),
            ("modules/auth/nuxt/server/api/auth/me.get.ts.j2", "server/api/auth/me.get.ts", &[]),
            ("modules/auth/nuxt/composables/useAuth.ts.j2", "composables/useAuth.ts", &["composables"]),
            ("modules/auth/nuxt/server/utils/auth.ts.j2", "server/utils/auth.ts", &["server/utils"]),
        ],
        (ModuleKind::Auth, StackKind::Symfony) => &[
            ("modules/auth/symfony/src/Controller/AuthController.php.j2", "src/Controller/AuthController.php", &[]),
            ("modules/auth/symfony/src/Security/JwtAuthenticator.php.j2", "src/Security/JwtAuthenticator.php", &["src/Security"]),
            ("modules/auth/symfony/config/packages/security.yaml.j2", "config/packages/security.yaml", &[]),
        ],
        (ModuleKind::Auth, StackKind::Laravel) => &[
            ("modules/auth/laravel/app/Http/Controllers/AuthController.php.j2", "app/Http/Controllers/AuthController.php", &["app/Http/Controllers"]),
            ("modules/auth/laravel/app/Http/Middleware/Authenticate.php.j2", "app/Http/Middleware/Authenticate.php", &["app/Http/Middleware"]),
            ("modules/auth/laravel/routes/auth.php.j2", "routes/auth.php", &[]),
        ],

        (ModuleKind::Crud, StackKind::Express) => &[
            ("modules/crud/express/src/routes/items.ts.j2", "src/routes/items.ts", &[]),
        ],
        (ModuleKind::Crud, StackKind::Nextjs) => &[
            ("modules/crud/nextjs/src/app/api/items/route.ts.j2", "src/app/api/items/route.ts", &["src/app/api/items"]),
            ("modules/crud/nextjs/src/app/api/items/id/route.ts.j2", "src/app/api/items/[id]/route.ts", &["src/app/api/items/[id]"]),
            ("modules/crud/nextjs/src/app/items/page.tsx.j2", "src/app/items/page.tsx", &["src/app/items"]),
        ],
        (ModuleKind::Crud, StackKind::Nuxt) => &[
            ("modules/crud/nuxt/server/api/items/index.get.ts.j2", "server/api/items/index.get.ts", &["server/api/items"]),
            ("modules/crud/nuxt/server/api/items/index.post.ts.j2", "server/api/items/index.post.ts", &[]),
            ("modules/crud/nuxt/server/api/items/id.get.ts.j2", "server/api/items/[id].get.ts", &[]),
            ("modules/crud/nuxt/server/api/items/id.put.ts.j2", "server/api/items/[id].put.ts", &[]),
            ("modules/crud/nuxt/server/api/items/id.delete.ts.j2", "server/api/items/[id].delete.ts", &[]),
            ("modules/crud/nuxt/pages/items/index.vue.j2", "pages/items/index.vue", &["pages/items"]),
        ],
        (ModuleKind::Crud, StackKind::Symfony) => &[
            ("modules/crud/symfony/src/Controller/ItemController.php.j2", "src/Controller/ItemController.php", &[]),
            ("modules/crud/symfony/src/Entity/Item.php.j2", "src/Entity/Item.php", &[]),
        ],
        (ModuleKind::Crud, StackKind::Laravel) => &[
            ("modules/crud/laravel/app/Http/Controllers/ItemController.php.j2", "app/Http/Controllers/ItemController.php", &[]),
            ("modules/crud/laravel/app/Models/Item.php.j2", "app/Models/Item.php", &[]),
            ("modules/crud/laravel/database/migrations/create_items_table.php.j2", "database/migrations/2024_01_01_000001_create_items_table.php", &[]),
            ("modules/crud/laravel/routes/items.php.j2", "routes/items.php", &[]),
        ],

        (ModuleKind::Admin, StackKind::Nextjs) => &[
            ("modules/admin/nextjs/src/app/admin/layout.tsx.j2", "src/app/admin/layout.tsx", &["src/app/admin"]),
            ("modules/admin/nextjs/src/app/admin/page.tsx.j2", "src/app/admin/page.tsx", &[]),
            ("modules/admin/nextjs/src/app/admin/users/page.tsx.j2", "src/app/admin/users/page.tsx", &["src/app/admin/users"]),
            ("modules/admin/nextjs/src/components/admin/Sidebar.tsx.j2", "src/components/admin/Sidebar.tsx", &["src/components/admin"]),
        ],
        (ModuleKind::Admin, StackKind::ViteReact) => &[
            ("modules/admin/vite-react/src/pages/admin/Dashboard.tsx.j2", "src/pages/admin/Dashboard.tsx", &["src/pages/admin"]),
            ("modules/admin/vite-react/src/pages/admin/Users.tsx.j2", "src/pages/admin/Users.tsx", &[]),
            ("modules/admin/vite-react/src/components/admin/Sidebar.tsx.j2", "src/components/admin/Sidebar.tsx", &["src/components/admin"]),
        ],
        (ModuleKind::Admin, StackKind::Nuxt) => &[
            ("modules/admin/nuxt/pages/admin/index.vue.j2", "pages/admin/index.vue", &["pages/admin"]),
            ("modules/admin/nuxt/pages/admin/users.vue.j2", "pages/admin/users.vue", &[]),
            ("modules/admin/nuxt/components/admin/Sidebar.vue.j2", "components/admin/Sidebar.vue", &["components/admin"]),
        ],
        (ModuleKind::Admin, StackKind::Symfony) => &[
            ("modules/admin/symfony/src/Controller/AdminController.php.j2", "src/Controller/AdminController.php", &[]),
        ],
        (ModuleKind::Admin, StackKind::Laravel) => &[
            ("modules/admin/laravel/app/Http/Controllers/AdminController.php.j2", "app/Http/Controllers/AdminController.php", &[]),
            ("modules/admin/laravel/routes/admin.php.j2", "routes/admin.php", &[]),
        ],

        (ModuleKind::FileUpload, StackKind::Express) => &[
            ("modules/file-upload/express/src/lib/storage.ts.j2", "src/lib/storage.ts", &[]),
            ("modules/file-upload/express/src/routes/upload.ts.j2", "src/routes/upload.ts", &[]),
        ],
        (ModuleKind::FileUpload, StackKind::Nextjs) => &[
            ("modules/file-upload/nextjs/src/lib/storage.ts.j2", "src/lib/storage.ts", &[]),
            ("modules/file-upload/nextjs/src/app/api/upload/route.ts.j2", "src/app/api/upload/route.ts", &["src/app/api/upload"]),
        ],
        (ModuleKind::FileUpload, StackKind::Nuxt) => &[
            ("modules/file-upload/nuxt/server/api/upload.post.ts.j2", "server/api/upload.post.ts", &[]),
            ("modules/file-upload/nuxt/server/utils/storage.ts.j2", "server/utils/storage.ts", &["server/utils"]),
        ],
        (ModuleKind::FileUpload, StackKind::Symfony) => &[
            ("modules/file-upload/symfony/src/Service/StorageService.php.j2", "src/Service/StorageService.php", &["src/Service"]),
            ("modules/file-upload/symfony/src/Controller/UploadController.php.j2", "src/Controller/UploadController.php", &[]),
        ],
        (ModuleKind::FileUpload, StackKind::Laravel) => &[
            ("modules/file-upload/laravel/app/Http/Controllers/UploadController.php.j2", "app/Http/Controllers/UploadController.php", &[]),
            ("modules/file-upload/laravel/routes/upload.php.j2", "routes/upload.php", &[]),
        ],

        (ModuleKind::Email, StackKind::Express) => &[
            ("modules/email/express/src/lib/mailer.ts.j2", "src/lib/mailer.ts", &[]),
            ("modules/email/express/src/templates/welcome.html.j2", "src/templates/welcome.html", &["src/templates"]),
        ],
        (ModuleKind::Email, StackKind::Nextjs) => &[
            ("modules/email/nextjs/src/lib/mailer.ts.j2", "src/lib/mailer.ts", &[]),
            ("modules/email/nextjs/src/templates/welcome.html.j2", "src/templates/welcome.html", &["src/templates"]),
        ],
        (ModuleKind::Email, StackKind::Nuxt) => &[
            ("modules/email/nuxt/server/utils/mailer.ts.j2", "server/utils/mailer.ts", &["server/utils"]),
            ("modules/email/nuxt/server/templates/welcome.html.j2", "server/templates/welcome.html", &["server/templates"]),
        ],
        (ModuleKind::Email, StackKind::Symfony) => &[
            ("modules/email/symfony/src/Service/MailerService.php.j2", "src/Service/MailerService.php", &["src/Service"]),
            ("modules/email/symfony/templates/emails/welcome.html.twig.j2", "templates/emails/welcome.html.twig", &["templates/emails"]),
        ],
        (ModuleKind::Email, StackKind::Laravel) => &[
            ("modules/email/laravel/app/Mail/WelcomeMail.php.j2", "app/Mail/WelcomeMail.php", &["app/Mail"]),
            ("modules/email/laravel/resources/views/emails/welcome.blade.php.j2", "resources/views/emails/welcome.blade.php", &["resources/views/emails"]),
        ],

        (ModuleKind::ApiDocs, StackKind::Express) => &[
            ("modules/api-docs/express/src/lib/swagger.ts.j2", "src/lib/swagger.ts", &[]),
        ],
        (ModuleKind::ApiDocs, StackKind::Nextjs) => &[
            ("modules/api-docs/nextjs/src/app/api-docs/page.tsx.j2", "src/app/api-docs/page.tsx", &["src/app/api-docs"]),
            ("modules/api-docs/nextjs/src/lib/swagger.ts.j2", "src/lib/swagger.ts", &[]),
        ],
        (ModuleKind::ApiDocs, StackKind::Nuxt) => &[
            ("modules/api-docs/nuxt/server/api/docs.get.ts.j2", "server/api/docs.get.ts", &[]),
            ("modules/api-docs/nuxt/server/utils/swagger.ts.j2", "server/utils/swagger.ts", &["server/utils"]),
        ],
        (ModuleKind::ApiDocs, StackKind::Symfony) => &[
            ("modules/api-docs/symfony/config/packages/nelmio_api_doc.yaml.j2", "config/packages/nelmio_api_doc.yaml", &[]),
        ],
        (ModuleKind::ApiDocs, StackKind::Laravel) => &[
            ("modules/api-docs/laravel/config/l5-swagger.php.j2", "config/l5-swagger.php", &[]),
        ],

        (ModuleKind::I18n, StackKind::Nextjs) => &[
            ("modules/i18n/nextjs/src/lib/i18n.ts.j2", "src/lib/i18n.ts", &[]),
            ("modules/i18n/nextjs/src/locales/en.json.j2", "src/locales/en.json", &["src/locales"]),
            ("modules/i18n/nextjs/src/locales/fr.json.j2", "src/locales/fr.json", &[]),
        ],
        (ModuleKind::I18n, StackKind::ViteReact) => &[
            ("modules/i18n/vite-react/src/lib/i18n.ts.j2", "src/lib/i18n.ts", &[]),
            ("modules/i18n/vite-react/src/locales/en.json.j2", "src/locales/en.json", &["src/locales"]),
            ("modules/i18n/vite-react/src/locales/fr.json.j2", "src/locales/fr.json", &[]),
        ],
        (ModuleKind::I18n, StackKind::Nuxt) => &[
            ("modules/i18n/nuxt/plugins/i18n.ts.j2", "plugins/i18n.ts", &["plugins"]),
            ("modules/i18n/nuxt/locales/en.json.j2", "locales/en.json", &["locales"]),
            ("modules/i18n/nuxt/locales/fr.json.j2", "locales/fr.json", &[]),
        ],
        (ModuleKind::I18n, StackKind::Express) => &[
            ("modules/i18n/express/src/lib/i18n.ts.j2", "src/lib/i18n.ts", &[]),
            ("modules/i18n/express/src/locales/en.json.j2", "src/locales/en.json", &["src/locales"]),
            ("modules/i18n/express/src/locales/fr.json.j2", "src/locales/fr.json", &[]),
        ],
        (ModuleKind::I18n, StackKind::Symfony) => &[
            ("modules/i18n/symfony/translations/messages.en.yaml.j2", "translations/messages.en.yaml", &["translations"]),
            ("modules/i18n/symfony/translations/messages.fr.yaml.j2", "translations/messages.fr.yaml", &[]),
        ],
        (ModuleKind::I18n, StackKind::Laravel) => &[
            ("modules/i18n/laravel/lang/en.json.j2", "lang/en.json", &["lang"]),
            ("modules/i18n/laravel/lang/fr.json.j2", "lang/fr.json", &[]),
        ],

        (ModuleKind::DarkMode, StackKind::Nextjs) => &[
            ("modules/dark-mode/nextjs/src/components/ThemeProvider.tsx.j2", "src/components/ThemeProvider.tsx", &["src/components"]),
            ("modules/dark-mode/nextjs/src/components/ThemeToggle.tsx.j2", "src/components/ThemeToggle.tsx", &[]),
        ],
        (ModuleKind::DarkMode, StackKind::ViteReact) => &[
            ("modules/dark-mode/vite-react/src/components/ThemeProvider.tsx.j2", "src/components/ThemeProvider.tsx", &["src/components"]),
            ("modules/dark-mode/vite-react/src/components/ThemeToggle.tsx.j2", "src/components/ThemeToggle.tsx", &[]),
        ],
        (ModuleKind::DarkMode, StackKind::Nuxt) => &[
            ("modules/dark-mode/nuxt/composables/useTheme.ts.j2", "composables/useTheme.ts", &["composables"]),
            ("modules/dark-mode/nuxt/components/ThemeToggle.vue.j2", "components/ThemeToggle.vue", &["components"]),
        ],

        _ => &[],
    };

    table
        .iter()
        .map(|(template, output, dirs)| RenderPlanEntry::with_dirs(template, output, dirs))
        .collect()
}

/// Entries shared by every stack for a module (currently only CI/CD).
fn module_shared_entries(module: ModuleKind) -> Vec<RenderPlanEntry> {
    match module {
        ModuleKind::CiCd => vec![RenderPlanEntry::with_dirs(
            "modules/ci-cd/shared/github/workflows/ci.yml.j2",
            ".github/workflows/ci.yml",
            &[".github/workflows"],
        )],
        _ => Vec::new(),
    }
}

/// All plan entries for one module on one stack.
///
/// The composite stack merges its sub-stacks' registrations under `client/`
/// and `server/`; shared entries stay at the project root.
pub fn module_entries(module: ModuleKind, stack: StackKind) -> Vec<RenderPlanEntry> {
    let mut entries: Vec<RenderPlanEntry> = match stack.sub_stacks() {
        Some((client, server)) => module_stack_entries(module, client)
            .into_iter()
            .map(|e| e.prefixed("client"))
            .chain(module_stack_entries(module, server).into_iter().map(|e| e.prefixed("server")))
            .collect(),
        None => module_stack_entries(module, stack),
    };
    entries.extend(module_shared_entries(module));
    entries
}

/// Serializable render context handed to every template.
///
/// Built exactly once per generation so every rendered artifact sees the same
/// hostnames, ports, and versions.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    pub project_name: String,
    pub stack: &'static str,
    pub stack_label: &'static str,
    pub is_js: bool,
    pub is_php: bool,
    pub typescript: bool,
    pub eslint_prettier: bool,
    pub docker: bool,
    pub port: u16,
    pub databases: Vec<&'static str>,
    pub db_name: String,
    pub db_hosts: BTreeMap<&'static str, &'static str>,
    pub orm: &'static str,
    pub prisma_provider: Option<&'static str>,
    pub services: Vec<&'static str>,
    pub service_hosts: BTreeMap<&'static str, &'static str>,
    pub mailer: bool,
    pub mail_host: Option<&'static str>,
    pub modules: Vec<&'static str>,
    pub auth_strategy: Option<&'static str>,
    pub versions: VersionSet,
}

impl TemplateContext {
    pub fn build(selection: &ProjectSelection, versions: &VersionSet, hosts: &HostMap) -> Self {
        let mailer = selection.services.contains(&ServiceKind::Mailpit);
        Self {
            project_name: selection.project_name.clone(),
            stack: selection.stack.slug(),
            stack_label: selection.stack.label(),
            is_js: selection.stack.is_js(),
            is_php: selection.stack.is_php(),
            typescript: selection.typescript,
            eslint_prettier: selection.eslint_prettier,
            docker: selection.docker,
            port: selection.stack.default_port(),
            databases: selection.databases.iter().map(DatabaseKind::slug).collect(),
            db_name: selection.db_name(),
            db_hosts: hosts.database_entries().clone(),
            orm: selection.orm.slug(),
            prisma_provider: selection.prisma_provider().map(|p| p.slug()),
            services: selection.services.iter().map(ServiceKind::slug).collect(),
            service_hosts: hosts.service_entries().clone(),
            mailer,
            mail_host: if mailer { hosts.service(ServiceKind::Mailpit) } else { None },
            modules: selection.modules.iter().map(ModuleKind::slug).collect(),
            auth_strategy: selection.auth_strategy.map(|s| s.slug()),
            versions: versions.clone(),
        }
    }
}
