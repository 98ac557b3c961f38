//! Main application entry point

use anyhow::Result;
use eframe::egui;
use std::sync::Arc;
use tracing::info;

use pf_core::events::events::{PageChangeStarted, PageSettled, PagerMounted};
use pf_core::events::{handler_from_fn, EventBus};
use pf_core::{Axis, PageCallbacks, PagerConfig, PagerHandle, PagerId};
use pf_ui::{apply_theme, top_bar, PagedContainer, Theme};

mod demo;

const STORAGE_KEY: &str = "pageflow_state";

/// State persisted across runs
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
struct PersistedState {
    config: Option<PagerConfig>,
    page: usize,
}

/// Main application state
struct PageflowApp {
    /// The paged container holding the demo pages
    container: PagedContainer,

    /// Shared navigation handle driving the top bar and keyboard input
    handle: PagerHandle,

    /// Analytics event bus fed by the pager lifecycle callbacks
    _events: Arc<EventBus>,

    /// Tokio runtime for background page loading
    _runtime: tokio::runtime::Runtime,
}

impl PageflowApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::default());

        let runtime = tokio::runtime::Runtime::new().unwrap();

        let persisted: PersistedState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, STORAGE_KEY))
            .unwrap_or_default();
        let config = persisted.config.unwrap_or_default();

        let events = Arc::new(EventBus::new());
        wire_analytics(&events);

        let pages = demo::demo_pages(runtime.handle());
        let container = PagedContainer::new(pages, config);

        let controller = container.controller().clone();
        controller.set_callbacks(page_callbacks(events.clone(), controller.id()));

        let handle = PagerHandle::new();
        handle.bind(&controller);

        events.publish(PagerMounted {
            pager: controller.id(),
            page_count: controller.page_count(),
        });

        // Return to the page the last session settled on; the controller
        // itself always mounts on page 0
        if persisted.page != 0 {
            controller.go_to(persisted.page);
        }

        Self {
            container,
            handle,
            _events: events,
            _runtime: runtime,
        }
    }
}

impl eframe::App for PageflowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        handle_keyboard(ctx, &self.handle);
        top_bar(ctx, "Pageflow", &self.handle);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.container.ui(ui);
            });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = PersistedState {
            config: Some(self.container.controller().config().clone()),
            page: self.handle.current_page(),
        };
        eframe::set_value(storage, STORAGE_KEY, &state);
    }
}

/// Arrow-key navigation along the configured axis, driven through the
/// shared handle like any other sibling control
fn handle_keyboard(ctx: &egui::Context, handle: &PagerHandle) {
    let axis = handle
        .controller()
        .map(|controller| controller.config().axis)
        .unwrap_or(Axis::Vertical);
    let (forward, backward) = match axis {
        Axis::Vertical => (egui::Key::ArrowDown, egui::Key::ArrowUp),
        Axis::Horizontal => (egui::Key::ArrowRight, egui::Key::ArrowLeft),
    };

    if ctx.input(|i| i.key_pressed(forward)) {
        handle.next();
    }
    if ctx.input(|i| i.key_pressed(backward)) {
        handle.prev();
    }
}

/// Lifecycle hooks that republish pager activity onto the event bus
fn page_callbacks(events: Arc<EventBus>, pager: PagerId) -> PageCallbacks {
    let start_bus = events.clone();
    PageCallbacks {
        on_scroll_start: Some(Box::new(move |target| {
            start_bus.publish(PageChangeStarted { pager, target });
        })),
        on_scroll: None,
        on_scroll_end: Some(Box::new(move |index| {
            events.publish(PageSettled { pager, index });
        })),
    }
}

/// Log pager lifecycle events as analytics
fn wire_analytics(events: &EventBus) {
    events.subscribe::<PagerMounted>(handler_from_fn(|event| {
        if let Some(mounted) = event.as_any().downcast_ref::<PagerMounted>() {
            info!(pager = %mounted.pager, pages = mounted.page_count, "pager mounted");
        }
    }));
    events.subscribe::<PageChangeStarted>(handler_from_fn(|event| {
        if let Some(change) = event.as_any().downcast_ref::<PageChangeStarted>() {
            info!(pager = %change.pager, target = change.target, "page change started");
        }
    }));
    events.subscribe::<PageSettled>(handler_from_fn(|event| {
        if let Some(settled) = event.as_any().downcast_ref::<PageSettled>() {
            info!(pager = %settled.pager, index = settled.index, "page settled");
        }
    }));
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Pageflow");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Pageflow",
        options,
        Box::new(|cc| Box::new(PageflowApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
