//! Full-page paginated scroll container
//!
//! Shows exactly one page at a time, full-surface sized, and slides between
//! adjacent pages on wheel/touch gestures or programmatic navigation. The
//! transition is an explicit two-slot interpolation: while the controller's
//! lock is held the outgoing and incoming pages are both drawn at offsets
//! derived from the slide direction, and the outgoing slot is discarded when
//! the lock releases.

use crate::dot_indicator::{DotIndicator, DotPainter, DotStyle};
use crate::page::PageView;
use crate::slide::{ease_in_out, slide_offsets};
use egui::{Align, Event, Layout, Rect, ScrollArea, Sense, TouchPhase, Ui, Vec2};
use pf_core::{Axis, PageCallbacks, PageController, PagerConfig};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Content shown in place of a page whose content is still loading
pub type FallbackFn = Box<dyn Fn(&mut Ui) + Send + Sync>;

/// The paged container widget
pub struct PagedContainer {
    controller: Arc<PageController>,
    pages: Vec<Box<dyn PageView>>,
    dots: DotIndicator,
    fallback: Option<FallbackFn>,
}

impl PagedContainer {
    /// Create a container over a fixed, ordered page set
    pub fn new(pages: Vec<Box<dyn PageView>>, config: PagerConfig) -> Self {
        let controller = Arc::new(PageController::new(pages.len(), config));
        info!(
            pager = %controller.id(),
            pages = pages.len(),
            "paged container mounted"
        );

        Self {
            controller,
            pages,
            dots: DotIndicator::default(),
            fallback: None,
        }
    }

    /// The command object for this container: `next`/`prev`/`go_to`/
    /// `current_page`. Also what a `PagerHandle` binds to.
    pub fn controller(&self) -> &Arc<PageController> {
        &self.controller
    }

    /// Install lifecycle hooks; intended for mount-time wiring
    pub fn with_callbacks(self, callbacks: PageCallbacks) -> Self {
        self.controller.set_callbacks(callbacks);
        self
    }

    pub fn with_dot_style(mut self, style: DotStyle) -> Self {
        self.dots = DotIndicator::new(style);
        self
    }

    pub fn with_dot_painter(mut self, painter: DotPainter) -> Self {
        self.dots = self.dots.with_painter(painter);
        self
    }

    pub fn with_fallback(
        mut self,
        fallback: impl Fn(&mut Ui) + Send + Sync + 'static,
    ) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Draw the container into all remaining space
    pub fn ui(&mut self, ui: &mut Ui) {
        let config = self.controller.config().clone();
        let rect = ui.available_rect_before_wrap();

        if !config.interaction_enabled {
            self.sequential_ui(ui, rect.size(), config.axis);
            return;
        }

        let now = Instant::now();
        self.controller.tick(now);

        let response = ui.allocate_rect(rect, Sense::hover());
        self.collect_input(ui, &response, rect);

        match self.controller.transition(now) {
            Some(snapshot) => {
                let eased = ease_in_out(snapshot.progress);
                let (out_offset, in_offset) =
                    slide_offsets(config.axis, snapshot.direction, rect.size(), eased);
                self.page_ui(ui, rect, rect.translate(out_offset), snapshot.from);
                self.page_ui(ui, rect, rect.translate(in_offset), snapshot.to);
                // Keep frames coming until the lock releases
                ui.ctx().request_repaint();
            }
            None => {
                let current = self.controller.current_page();
                self.page_ui(ui, rect, rect, current);
            }
        }

        if config.controls_enabled {
            self.dots.ui(ui, rect, &self.controller);
        }
    }

    /// Route wheel and touch input to the controller
    fn collect_input(&self, ui: &Ui, response: &egui::Response, rect: Rect) {
        if response.hovered() {
            // egui's scroll delta is inverted relative to raw wheel movement
            let scroll = ui.input(|i| i.scroll_delta);
            if scroll != Vec2::ZERO {
                self.controller.on_wheel(-scroll.x, -scroll.y);
            }
        }

        let touches: Vec<(TouchPhase, egui::Pos2)> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    Event::Touch { phase, pos, .. } => Some((*phase, *pos)),
                    _ => None,
                })
                .collect()
        });

        for (phase, pos) in touches {
            match phase {
                TouchPhase::Start => {
                    if rect.contains(pos) {
                        self.controller.on_touch_start(pos.x, pos.y);
                    }
                }
                TouchPhase::Move => self.controller.on_touch_move(pos.x, pos.y),
                TouchPhase::End | TouchPhase::Cancel => self.controller.on_touch_end(),
            }
        }
    }

    /// Draw one page into a slot rect, clipped to the container
    fn page_ui(&mut self, ui: &mut Ui, clip: Rect, slot: Rect, index: usize) {
        if index >= self.pages.len() {
            return;
        }

        let mut child = ui.child_ui(slot, Layout::top_down(Align::Min));
        child.set_clip_rect(clip.intersect(child.clip_rect()));

        let page = &mut self.pages[index];
        if page.is_ready() {
            page.ui(&mut child);
            return;
        }

        // Poll until the page's content arrives
        child
            .ctx()
            .request_repaint_after(std::time::Duration::from_millis(100));
        if let Some(fallback) = &self.fallback {
            fallback(&mut child);
        } else {
            child.centered_and_justified(|ui| {
                ui.add(egui::Spinner::new().size(32.0));
            });
        }
    }

    /// Disabled mode: all pages laid out along the axis, no transition
    /// machinery and no gesture handling
    fn sequential_ui(&mut self, ui: &mut Ui, page_size: Vec2, axis: Axis) {
        let fallback = &self.fallback;
        let pages = &mut self.pages;

        match axis {
            Axis::Vertical => {
                ScrollArea::vertical()
                    .id_source("paged_container_sequential")
                    .show(ui, |ui| {
                        for page in pages.iter_mut() {
                            static_page(ui, page_size, page.as_mut(), fallback);
                        }
                    });
            }
            Axis::Horizontal => {
                ScrollArea::horizontal()
                    .id_source("paged_container_sequential")
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            for page in pages.iter_mut() {
                                static_page(ui, page_size, page.as_mut(), fallback);
                            }
                        });
                    });
            }
        }
    }
}

fn static_page(ui: &mut Ui, size: Vec2, page: &mut dyn PageView, fallback: &Option<FallbackFn>) {
    let (_, rect) = ui.allocate_space(size);
    let mut child = ui.child_ui(rect, Layout::top_down(Align::Min));

    if page.is_ready() {
        page.ui(&mut child);
        return;
    }

    child
        .ctx()
        .request_repaint_after(std::time::Duration::from_millis(100));
    if let Some(fallback) = fallback {
        fallback(&mut child);
    } else {
        child.centered_and_justified(|ui| {
            ui.add(egui::Spinner::new().size(32.0));
        });
    }
}
