//! Shared navigation handle
//!
//! An explicit, cloneable handle that sibling controls thread around instead
//! of reaching into the container. It forwards navigation calls to the bound
//! controller and republishes the settled page; every forwarding operation is
//! a no-op while unbound, so a handle can outlive the container it drove.

use super::{PageController, PageEvent, PageSubscriber};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use thiserror::Error;
use tracing::info;

/// Errors from the strict controller accessor
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HandleError {
    /// The handle was never bound, or the controller it wrapped was dropped
    #[error("navigation handle is not bound to a live pager")]
    Unbound,
}

/// Cloneable navigation handle shared between the container and its siblings
#[derive(Clone, Default)]
pub struct PagerHandle {
    inner: Arc<HandleInner>,
}

#[derive(Default)]
struct HandleInner {
    controller: RwLock<Weak<PageController>>,
    settled: RwLock<usize>,
}

impl PageSubscriber for HandleInner {
    fn on_page_settled(&self, event: &PageEvent) {
        *self.settled.write() = event.index;
    }
}

impl PagerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind (or rebind, on remount) the handle to a controller instance.
    /// The republished page is re-seeded from the new controller.
    pub fn bind(&self, controller: &Arc<PageController>) {
        *self.inner.controller.write() = Arc::downgrade(controller);
        *self.inner.settled.write() = controller.current_page();
        controller.add_subscriber(self.inner.clone());
        info!(pager = %controller.id(), "navigation handle bound");
    }

    /// Strict accessor: using a handle that is not bound to a live
    /// controller is an integration mistake and fails loudly
    pub fn controller(&self) -> Result<Arc<PageController>, HandleError> {
        self.inner
            .controller
            .read()
            .upgrade()
            .ok_or(HandleError::Unbound)
    }

    fn bound(&self) -> Option<Arc<PageController>> {
        self.inner.controller.read().upgrade()
    }

    pub fn next(&self) {
        if let Some(controller) = self.bound() {
            controller.next();
        }
    }

    pub fn prev(&self) {
        if let Some(controller) = self.bound() {
            controller.prev();
        }
    }

    pub fn go_to(&self, index: usize) {
        if let Some(controller) = self.bound() {
            controller.go_to(index);
        }
    }

    /// Live page of the bound controller, possibly mid-transition;
    /// `None` is the unbound sentinel
    pub fn live_page(&self) -> Option<usize> {
        self.bound().map(|controller| controller.current_page())
    }

    /// Republished page, updated only when a transition settles
    pub fn current_page(&self) -> usize {
        *self.inner.settled.read()
    }

    pub fn page_count(&self) -> Option<usize> {
        self.bound().map(|controller| controller.page_count())
    }
}
