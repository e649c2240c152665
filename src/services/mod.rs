pub mod catalog;
pub mod compose;
pub mod guide;
pub mod plan;
pub mod resolver;

mod embedded_templates;
mod registry_json;

pub use embedded_templates::EmbeddedTemplateStore;
pub use registry_json::JsonProjectRegistry;
