use std::io;

use thiserror::Error;

/// Library-wide error type for stackforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Target project directory already exists; never overwritten.
    #[error(
        "Directory \"{0}\" already exists. Choose a different name or delete the existing directory."
    )]
    ProjectDirExists(String),

    /// Project name failed validation.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// Unknown selector value given on the command line.
    #[error("Unknown {what} '{value}'. Available: {available}")]
    UnknownSelector { what: &'static str, value: String, available: String },

    /// A template referenced by the render plan is absent from the store.
    #[error("Template not found in store: {0}")]
    TemplateNotFound(String),

    /// A template failed to render.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Project registry could not be read or written. Non-fatal for generation.
    #[error("Project registry error: {0}")]
    Registry(String),

    /// Registry document could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Selection is structurally invalid (incompatible stack, ORM, modules).
    #[error("{0}")]
    Validation(String),

    /// Interactive prompt failure (terminal I/O).
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// User cancelled an interactive prompt. Reported as a clean exit.
    #[error("cancelled")]
    Cancelled,
}

impl AppError {
    /// Whether this error is a user cancellation rather than a real failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_errors_name_the_offending_template() {
        let err = AppError::TemplateNotFound("nextjs/package.json.j2".to_string());
        assert!(err.to_string().contains("nextjs/package.json.j2"));

        let err = AppError::TemplateRender {
            template: "shared/env.j2".to_string(),
            reason: "undefined variable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("shared/env.j2"));
        assert!(msg.contains("undefined variable"));
    }

    #[test]
    fn cancellation_is_distinguished() {
        assert!(AppError::Cancelled.is_cancellation());
        assert!(!AppError::ProjectDirExists("x".into()).is_cancellation());
    }
}
