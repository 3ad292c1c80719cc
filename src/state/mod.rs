//! Application state module

mod app_state;
mod forms;
mod menu;
mod page_layout;
mod reveal;
mod scroll;
mod theme;

pub use app_state::*;
pub use forms::*;
pub use menu::*;
pub use page_layout::*;
pub use reveal::*;
pub use scroll::*;
pub use theme::*;
