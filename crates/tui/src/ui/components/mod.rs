//! UI components: sidebar, menu toggle, content pane, toasts.

pub mod component;
pub mod content;
pub mod menu_toggle;
pub mod sidebar;
pub mod toasts;

pub use component::*;
pub use content::ContentComponent;
pub use menu_toggle::MenuToggleComponent;
pub use sidebar::SidebarComponent;
pub use toasts::ToastsComponent;
