//! Page transition controller

use super::{
    PageCallbacks, PageEvent, PageSubscriber, PagerId, SlideDirection, TransitionSnapshot,
};
use crate::config::PagerConfig;
use crate::gesture::{GestureAccumulator, Intent, TouchTracker};
use parking_lot::{Mutex, RwLock};
use std::sync::{Arc, Weak};
use std::time::Instant;
use tracing::debug;

/// Navigation state stored internally
#[derive(Debug)]
struct NavigationState {
    current: usize,
    previous: usize,
    lock: Option<TransitionLock>,
}

/// The window during which no new navigation request is accepted
#[derive(Debug, Clone, Copy)]
struct TransitionLock {
    started: Instant,
    deadline: Instant,
    direction: SlideDirection,
}

/// Gesture state owned by the controller
struct GestureState {
    accumulator: GestureAccumulator,
    touch: TouchTracker,
}

/// The page transition controller
///
/// Owns the current/previous page indices, the transition lock, and the
/// gesture accumulator. Transitions are strictly serialized: a request made
/// while a transition is in flight is dropped, not queued. The host pumps
/// [`PageController::tick`] every frame; the first tick at or past the
/// deadline releases the lock and notifies subscribers.
pub struct PageController {
    id: PagerId,
    page_count: usize,
    config: PagerConfig,
    state: RwLock<NavigationState>,
    gesture: Mutex<GestureState>,
    callbacks: RwLock<PageCallbacks>,
    subscribers: RwLock<Vec<Weak<dyn PageSubscriber>>>,
}

impl std::fmt::Debug for PageController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageController")
            .field("id", &self.id)
            .field("page_count", &self.page_count)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl PageController {
    /// Create a controller for a fixed set of `page_count` pages,
    /// starting on page 0
    pub fn new(page_count: usize, config: PagerConfig) -> Self {
        let gesture = GestureState {
            accumulator: GestureAccumulator::new(config.axis, config.threshold),
            touch: TouchTracker::new(),
        };

        Self {
            id: PagerId::new_v4(),
            page_count,
            config,
            state: RwLock::new(NavigationState {
                current: 0,
                previous: 0,
                lock: None,
            }),
            gesture: Mutex::new(gesture),
            callbacks: RwLock::new(PageCallbacks::default()),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    pub fn id(&self) -> PagerId {
        self.id
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Replace the lifecycle hooks; intended for mount-time wiring
    pub fn set_callbacks(&self, callbacks: PageCallbacks) {
        *self.callbacks.write() = callbacks;
    }

    /// Add a settled-page subscriber; held weakly, dead entries are
    /// dropped on the next notification
    pub fn add_subscriber(&self, subscriber: Arc<dyn PageSubscriber>) {
        self.subscribers.write().push(Arc::downgrade(&subscriber));
    }

    /// Currently visible page; synchronous, no side effects
    pub fn current_page(&self) -> usize {
        self.state.read().current
    }

    /// Last settled page, used for direction inference
    pub fn previous_page(&self) -> usize {
        self.state.read().previous
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.read().lock.is_some()
    }

    /// Request the page after the current one
    pub fn next(&self) {
        let target = self.state.read().current + 1;
        self.change_page(target, Instant::now());
    }

    /// Request the page before the current one
    pub fn prev(&self) {
        let current = self.state.read().current;
        if let Some(target) = current.checked_sub(1) {
            self.change_page(target, Instant::now());
        }
    }

    /// Request a specific page
    pub fn go_to(&self, target: usize) {
        self.change_page(target, Instant::now());
    }

    /// Feed a wheel event; positive values point toward the next page
    pub fn on_wheel(&self, dx: f32, dy: f32) {
        if !self.config.interaction_enabled {
            return;
        }
        let intent = self.gesture.lock().accumulator.feed(dx, dy);
        self.apply_intent(intent);
    }

    /// Record the initial contact point of a touch
    pub fn on_touch_start(&self, x: f32, y: f32) {
        if !self.config.interaction_enabled {
            return;
        }
        self.gesture.lock().touch.begin(x, y);
    }

    /// Feed a touch-move event; the tracker converts it to this segment's
    /// movement before accumulation
    pub fn on_touch_move(&self, x: f32, y: f32) {
        if !self.config.interaction_enabled {
            return;
        }
        let intent = {
            let mut gesture = self.gesture.lock();
            match gesture.touch.motion(x, y) {
                Some((dx, dy)) => gesture.accumulator.feed(dx, dy),
                None => return,
            }
        };
        self.apply_intent(intent);
    }

    pub fn on_touch_end(&self) {
        self.gesture.lock().touch.end();
    }

    fn apply_intent(&self, intent: Intent) {
        match intent {
            Intent::Advance => self.next(),
            Intent::Retreat => self.prev(),
            Intent::None => {}
        }
    }

    /// Commit a page change, or reject it without side effects
    ///
    /// Rejected when the target is out of range, equal to the current page,
    /// a transition is already in flight, or interaction is disabled. On
    /// commit the accumulated gesture delta is cleared regardless of which
    /// trigger caused the change.
    pub(crate) fn change_page(&self, target: usize, now: Instant) -> bool {
        if !self.config.interaction_enabled || self.page_count == 0 {
            return false;
        }

        {
            let mut state = self.state.write();
            if target >= self.page_count || target == state.current || state.lock.is_some() {
                debug!(
                    pager = %self.id,
                    target,
                    current = state.current,
                    locked = state.lock.is_some(),
                    "navigation request rejected"
                );
                return false;
            }

            let direction = if target > state.previous {
                SlideDirection::Forward
            } else {
                SlideDirection::Backward
            };
            state.current = target;
            state.lock = Some(TransitionLock {
                started: now,
                deadline: now + self.config.duration(),
                direction,
            });
        }

        self.gesture.lock().accumulator.reset();

        let callbacks = self.callbacks.read();
        if let Some(cb) = &callbacks.on_scroll_start {
            cb(target);
        }
        if let Some(cb) = &callbacks.on_scroll {
            cb(target);
        }
        true
    }

    /// Release the lock once the transition window has elapsed
    ///
    /// Returns true when a transition settled on this tick. The release is
    /// keyed to the wall-clock deadline recorded at commit, not to frame
    /// count, so the window is the same regardless of frame rate.
    pub fn tick(&self, now: Instant) -> bool {
        let settled = {
            let mut state = self.state.write();
            match state.lock {
                Some(lock) if now >= lock.deadline => {
                    state.lock = None;
                    state.previous = state.current;
                    Some(state.current)
                }
                _ => None,
            }
        };

        let Some(index) = settled else {
            return false;
        };

        {
            let callbacks = self.callbacks.read();
            if let Some(cb) = &callbacks.on_scroll_end {
                cb(index);
            }
        }
        self.notify_subscribers(index);
        true
    }

    /// The transition currently in flight, if any
    pub fn transition(&self, now: Instant) -> Option<TransitionSnapshot> {
        let state = self.state.read();
        let lock = state.lock?;
        let total = self.config.duration();
        let progress = if total.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(lock.started).as_secs_f32() / total.as_secs_f32())
                .clamp(0.0, 1.0)
        };

        Some(TransitionSnapshot {
            from: state.previous,
            to: state.current,
            direction: lock.direction,
            progress,
        })
    }

    fn notify_subscribers(&self, index: usize) {
        let event = PageEvent {
            index,
            page_count: self.page_count,
        };
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_page_settled(&event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn controller(page_count: usize) -> PageController {
        PageController::new(page_count, PagerConfig::default())
    }

    fn counting_callbacks() -> (PageCallbacks, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let callbacks = PageCallbacks {
            on_scroll_start: Some(Box::new({
                let calls = calls.clone();
                move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                }
            })),
            on_scroll: Some(Box::new({
                let calls = calls.clone();
                move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                }
            })),
            on_scroll_end: Some(Box::new({
                let calls = calls.clone();
                move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                }
            })),
        };
        (callbacks, calls)
    }

    #[test]
    fn test_change_page_transitions_and_settles() {
        let c = controller(3);
        let t0 = Instant::now();

        assert!(c.change_page(1, t0));
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.previous_page(), 0);
        assert!(c.is_transitioning());

        // Just short of the deadline the lock is still held
        assert!(!c.tick(t0 + Duration::from_millis(790)));
        assert!(c.is_transitioning());

        assert!(c.tick(t0 + Duration::from_millis(801)));
        assert!(!c.is_transitioning());
        assert_eq!(c.previous_page(), 1);
    }

    #[test]
    fn test_out_of_range_is_a_silent_no_op() {
        let c = controller(3);
        let (callbacks, calls) = counting_callbacks();
        c.set_callbacks(callbacks);

        assert!(!c.change_page(3, Instant::now()));
        assert_eq!(c.current_page(), 0);
        assert!(!c.is_transitioning());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_self_target_is_a_no_op() {
        let c = controller(3);
        let (callbacks, calls) = counting_callbacks();
        c.set_callbacks(callbacks);

        c.go_to(0);
        assert!(!c.is_transitioning());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_requests_while_locked_are_dropped() {
        let c = controller(5);
        let t0 = Instant::now();

        assert!(c.change_page(1, t0));
        assert!(!c.change_page(2, t0 + Duration::from_millis(100)));
        assert_eq!(c.current_page(), 1);

        // After release the next request goes through
        assert!(c.tick(t0 + Duration::from_secs(1)));
        assert!(c.change_page(2, t0 + Duration::from_secs(1)));
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn test_empty_pager_rejects_everything() {
        let c = controller(0);
        c.next();
        c.prev();
        c.go_to(0);
        assert_eq!(c.current_page(), 0);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn test_single_page_never_navigates() {
        let c = controller(1);
        let (callbacks, calls) = counting_callbacks();
        c.set_callbacks(callbacks);

        c.next();
        c.prev();
        c.go_to(0);
        assert_eq!(c.current_page(), 0);
        assert!(!c.is_transitioning());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_direction_follows_previous_page() {
        let c = controller(3);
        let t0 = Instant::now();

        c.change_page(2, t0);
        assert_eq!(
            c.transition(t0).unwrap().direction,
            SlideDirection::Forward
        );
        c.tick(t0 + Duration::from_secs(1));

        let t1 = t0 + Duration::from_secs(2);
        c.change_page(1, t1);
        let snapshot = c.transition(t1).unwrap();
        assert_eq!(snapshot.direction, SlideDirection::Backward);
        assert_eq!(snapshot.from, 2);
        assert_eq!(snapshot.to, 1);
    }

    #[test]
    fn test_transition_progress_is_wall_clock() {
        let c = controller(2);
        let t0 = Instant::now();
        c.change_page(1, t0);

        let half = c.transition(t0 + Duration::from_millis(400)).unwrap();
        assert!((half.progress - 0.5).abs() < 0.05);

        let done = c.transition(t0 + Duration::from_secs(5)).unwrap();
        assert_eq!(done.progress, 1.0);
    }

    #[test]
    fn test_callback_order() {
        let c = controller(2);
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let push = |label: &'static str| {
            let order = order.clone();
            Some(Box::new(move |_: usize| order.lock().push(label)) as crate::navigation::ScrollCallback)
        };
        c.set_callbacks(PageCallbacks {
            on_scroll_start: push("start"),
            on_scroll: push("scroll"),
            on_scroll_end: push("end"),
        });

        let t0 = Instant::now();
        c.change_page(1, t0);
        assert_eq!(*order.lock(), vec!["start", "scroll"]);

        c.tick(t0 + Duration::from_secs(1));
        assert_eq!(*order.lock(), vec!["start", "scroll", "end"]);
    }

    #[test]
    fn test_wheel_accumulation_scenario() {
        // N=3, threshold=100, duration=0.8s: +60 accumulates, +50 commits,
        // +200 during the lock is dropped, settle leaves previous_page=1.
        let c = controller(3);

        c.on_wheel(0.0, 60.0);
        assert_eq!(c.current_page(), 0);
        assert!(!c.is_transitioning());

        c.on_wheel(0.0, 50.0);
        assert_eq!(c.current_page(), 1);
        assert!(c.is_transitioning());

        c.on_wheel(0.0, 200.0);
        assert_eq!(c.current_page(), 1);

        assert!(c.tick(Instant::now() + Duration::from_secs(1)));
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.previous_page(), 1);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn test_stale_delta_retriggers_after_release() {
        // Input recorded while locked is preserved, so the first event after
        // release commits without further accumulation.
        let c = controller(3);

        c.on_wheel(0.0, 150.0);
        assert_eq!(c.current_page(), 1);
        c.on_wheel(0.0, 200.0);
        c.tick(Instant::now() + Duration::from_secs(1));

        c.on_wheel(0.0, 1.0);
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn test_commit_resets_gesture_delta() {
        let c = controller(3);
        c.on_wheel(0.0, 60.0);
        assert_eq!(c.gesture.lock().accumulator.pending(), 60.0);

        // Programmatic navigation clears the accumulated delta too
        c.go_to(1);
        assert_eq!(c.gesture.lock().accumulator.pending(), 0.0);
    }

    #[test]
    fn test_touch_segments_accumulate() {
        let c = controller(2);
        c.on_touch_start(0.0, 500.0);
        c.on_touch_move(0.0, 440.0);
        assert_eq!(c.current_page(), 0);
        c.on_touch_move(0.0, 390.0);
        assert_eq!(c.current_page(), 1);
        c.on_touch_end();
    }

    #[test]
    fn test_disabled_mode_bypasses_machinery() {
        let config = PagerConfig {
            interaction_enabled: false,
            ..Default::default()
        };
        let c = PageController::new(3, config);
        let (callbacks, calls) = counting_callbacks();
        c.set_callbacks(callbacks);

        c.on_wheel(0.0, 500.0);
        c.next();
        c.go_to(2);
        assert_eq!(c.current_page(), 0);
        assert!(!c.is_transitioning());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_subscribers_notified_only_on_settle() {
        struct Recorder(AtomicUsize);
        impl PageSubscriber for Recorder {
            fn on_page_settled(&self, event: &PageEvent) {
                self.0.store(event.index + 1, Ordering::SeqCst);
            }
        }

        let c = controller(3);
        let recorder = Arc::new(Recorder(AtomicUsize::new(0)));
        c.add_subscriber(recorder.clone());

        let t0 = Instant::now();
        c.change_page(2, t0);
        assert_eq!(recorder.0.load(Ordering::SeqCst), 0);

        c.tick(t0 + Duration::from_secs(1));
        assert_eq!(recorder.0.load(Ordering::SeqCst), 3);
    }
}
