//! User interface components for the full-page pager
//!
//! This crate provides the egui-based presentation host: the paged
//! container widget, the dot indicator overlay, the application shell,
//! and the shared theme.

pub mod dot_indicator;
pub mod page;
pub mod paged_container;
pub mod shell;
pub mod slide;
pub mod theme;

/// Re-export commonly used types
pub use dot_indicator::{DotIndicator, DotStyle};
pub use page::PageView;
pub use paged_container::PagedContainer;
pub use shell::top_bar;
pub use theme::{apply_theme, Theme};

// Common icon definitions
pub mod icons {
    pub const PREV: &str = "⏴";
    pub const NEXT: &str = "⏵";
    pub const FIRST: &str = "⏮";
    pub const LAST: &str = "⏭";
}
