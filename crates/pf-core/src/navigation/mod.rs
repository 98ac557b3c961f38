//! Page navigation: transition controller, shared handle, subscribers

use uuid::Uuid;

mod controller;
mod handle;
mod subscriber;

pub use controller::PageController;
pub use handle::{HandleError, PagerHandle};
pub use subscriber::PageSubscriber;

/// Unique identifier for a controller instance
pub type PagerId = Uuid;

/// Which edge incoming content enters from, derived from the relation of
/// the transition target to the previously settled page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Target is past the previous page; content enters from the forward
    /// edge (bottom for the vertical axis, right for the horizontal)
    Forward,
    /// Content enters from the backward edge
    Backward,
}

/// Payload delivered to subscribers when a transition settles
#[derive(Debug, Clone)]
pub struct PageEvent {
    /// The page the container has settled on
    pub index: usize,
    /// Total number of pages in the container
    pub page_count: usize,
}

/// A transition currently in flight, as seen by the presentation host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSnapshot {
    /// Outgoing page index
    pub from: usize,
    /// Incoming (already current) page index
    pub to: usize,
    /// Edge selection for the slide
    pub direction: SlideDirection,
    /// Linear progress in `[0, 1]`
    pub progress: f32,
}

/// Fire-and-forget lifecycle notification; the return value is never consumed
pub type ScrollCallback = Box<dyn Fn(usize) + Send + Sync>;

/// Optional lifecycle hooks invoked by the controller
#[derive(Default)]
pub struct PageCallbacks {
    /// Invoked when a page change commits, before the slide runs
    pub on_scroll_start: Option<ScrollCallback>,
    /// Invoked immediately after `on_scroll_start`
    pub on_scroll: Option<ScrollCallback>,
    /// Invoked when the transition settles and the lock releases
    pub on_scroll_end: Option<ScrollCallback>,
}

impl std::fmt::Debug for PageCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCallbacks")
            .field("on_scroll_start", &self.on_scroll_start.is_some())
            .field("on_scroll", &self.on_scroll.is_some())
            .field("on_scroll_end", &self.on_scroll_end.is_some())
            .finish()
    }
}
