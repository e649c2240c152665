use serde::Serialize;

/// Pinned default versions for scaffolded frameworks and database images.
///
/// These are the versions written into generated manifests and compose files.
/// Online freshness checks are out of scope; the set is static per release.
#[derive(Debug, Clone, Serialize)]
pub struct VersionSet {
    pub node: &'static str,
    pub typescript: &'static str,
    pub nextjs: &'static str,
    pub react: &'static str,
    pub vite: &'static str,
    pub nuxt: &'static str,
    pub express: &'static str,
    pub tailwind: &'static str,
    pub eslint: &'static str,
    pub prettier: &'static str,
    pub php: &'static str,
    pub composer: &'static str,
    pub symfony: &'static str,
    pub laravel: &'static str,
    pub databases: DatabaseVersions,
}

/// Docker image tags for the containerized databases.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseVersions {
    pub postgresql: &'static str,
    pub mongodb: &'static str,
    pub mysql: &'static str,
    pub redis: &'static str,
}

impl Default for VersionSet {
    fn default() -> Self {
        Self {
            node: "22",
            typescript: "5.7",
            nextjs: "15",
            react: "19",
            vite: "6",
            nuxt: "3.15",
            express: "4.21",
            tailwind: "4",
            eslint: "9",
            prettier: "3",
            php: "8.3",
            composer: "2",
            symfony: "7.2",
            laravel: "11",
            databases: DatabaseVersions {
                postgresql: "17",
                mongodb: "8",
                mysql: "9",
                redis: "7.4",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_non_empty() {
        let versions = VersionSet::default();
        assert!(!versions.node.is_empty());
        assert!(!versions.databases.postgresql.is_empty());
    }
}
