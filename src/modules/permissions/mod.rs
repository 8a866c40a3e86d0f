pub mod model;
pub mod service;

pub use model::{ItemView, SectionToggle, SectionView};
pub use service::PermissionEditor;
