//! Navigation subscriber trait

use super::PageEvent;

/// Trait for components that need to observe settled page changes
///
/// Called only once a transition fully commits, never mid-transition, so
/// observers never see a page that does not yet have a settled transition
/// behind it.
pub trait PageSubscriber: Send + Sync {
    fn on_page_settled(&self, event: &PageEvent);
}
