use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{ProjectRegistry, RegistryEntry};

/// Project registry persisted as pretty-printed JSON under the user's home
/// directory (`~/.stackforge/projects.json`).
///
/// `STACKFORGE_HOME` overrides the base directory, which keeps tests away
/// from the real home. A missing or corrupted file reads as an empty
/// registry; recording replaces any previous entry with the same name.
#[derive(Debug, Clone)]
pub struct JsonProjectRegistry {
    path: PathBuf,
}

impl JsonProjectRegistry {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn new_default() -> Result<Self, AppError> {
        let base = match std::env::var_os("STACKFORGE_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home = std::env::var("HOME")
                    .map_err(|_| AppError::Registry("HOME environment variable not set".into()))?;
                PathBuf::from(home).join(".stackforge")
            }
        };
        Ok(Self { path: base.join("projects.json") })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectRegistry for JsonProjectRegistry {
    fn load(&self) -> Result<Vec<RegistryEntry>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        // A registry that fails to parse is treated as empty rather than
        // blocking generation.
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    fn record(&self, entry: RegistryEntry) -> Result<(), AppError> {
        let mut entries = self.load()?;
        entries.retain(|existing| existing.name != entry.name);
        entries.push(entry);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
