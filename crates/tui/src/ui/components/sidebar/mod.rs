//! Navigation sidebar: menu entries, panel toggle and logout button.

pub mod menu;
mod sidebar_component;
mod state;
pub mod toggle;

pub use menu::{MENU_ENTRIES, MenuEntry, RenderedEntry, active_index, render_list};
pub use sidebar_component::SidebarComponent;
pub use state::{SidebarRow, SidebarState};
pub use toggle::PanelToggle;
