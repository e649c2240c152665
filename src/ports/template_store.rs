use crate::domain::AppError;
use crate::services::plan::TemplateContext;

/// Port for the parameterized template store.
///
/// Templates are addressed by a stable relative path (the plan's template
/// reference). The store is injected so tests can substitute failing or
/// in-memory stores.
pub trait TemplateStore {
    /// Render the template at `path` with the given context.
    ///
    /// A missing template is `AppError::TemplateNotFound`; a render failure
    /// is `AppError::TemplateRender` naming the template and cause.
    fn render(&self, path: &str, ctx: &TemplateContext) -> Result<String, AppError>;

    /// Whether a template exists at `path`.
    fn contains(&self, path: &str) -> bool;
}
