use crate::ports::{ProjectRegistry, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<T: TemplateStore, R: ProjectRegistry> {
    templates: T,
    registry: R,
}

impl<T: TemplateStore, R: ProjectRegistry> AppContext<T, R> {
    pub fn new(templates: T, registry: R) -> Self {
        Self { templates, registry }
    }

    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }
}
