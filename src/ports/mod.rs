pub mod project_registry;
pub mod template_store;

pub use project_registry::{ProjectRegistry, RegistryEntry};
pub use template_store::TemplateStore;
