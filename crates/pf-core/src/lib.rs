//! Core functionality for the full-page pager
//!
//! This crate provides the gesture-accumulation and page-transition state
//! machine behind the paged container, independent of any presentation host.

pub mod config;
pub mod events;
pub mod gesture;
pub mod navigation;

// Re-export commonly used types
pub use config::{Axis, ControlPosition, PagerConfig};
pub use gesture::{GestureAccumulator, Intent, TouchTracker};
pub use navigation::{
    HandleError, PageCallbacks, PageController, PageEvent, PageSubscriber, PagerHandle, PagerId,
    SlideDirection, TransitionSnapshot,
};
