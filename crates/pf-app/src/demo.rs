//! Demo pages for the showcase binary

use egui::{Align, Color32, Layout, RichText, Rounding, Ui, Vec2};
use parking_lot::RwLock;
use pf_ui::{theme, PageView};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Build the fixed demo page set
pub fn demo_pages(runtime: &tokio::runtime::Handle) -> Vec<Box<dyn PageView>> {
    vec![
        Box::new(HeroPage),
        Box::new(GalleryPage::new()),
        Box::new(SlowPage::new(runtime)),
        Box::new(FinalePage),
    ]
}

fn fill_background(ui: &mut Ui, color: Color32) {
    let rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(rect, Rounding::ZERO, color);
}

/// Opening page with usage hints
struct HeroPage;

impl PageView for HeroPage {
    fn title(&self) -> &str {
        "Welcome"
    }

    fn ui(&mut self, ui: &mut Ui) {
        fill_background(ui, Color32::from_rgb(24, 26, 34));
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.heading(RichText::new("Pageflow").size(42.0).strong());
            ui.add_space(12.0);
            ui.label("One page at a time, full viewport, animated.");
            ui.add_space(24.0);
            ui.label(
                RichText::new("Scroll, swipe, press the arrow keys, or click a dot to navigate")
                    .color(theme::muted_color()),
            );
        });
    }
}

/// A wall of colored tiles, mostly here to make the slide visible
struct GalleryPage {
    tiles: Vec<Color32>,
}

impl GalleryPage {
    fn new() -> Self {
        let accent = theme::accent_color();
        let tiles = (0..24)
            .map(|i| {
                let fade = 0.25 + 0.75 * (i as f32 / 23.0);
                accent.linear_multiply(fade)
            })
            .collect();
        Self { tiles }
    }
}

impl PageView for GalleryPage {
    fn title(&self) -> &str {
        "Gallery"
    }

    fn ui(&mut self, ui: &mut Ui) {
        fill_background(ui, Color32::from_rgb(21, 23, 27));
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.heading("Gallery");
        });
        ui.add_space(24.0);

        let tile_size = Vec2::splat(96.0);
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            for row in self.tiles.chunks(6) {
                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() - 6.0 * (tile_size.x + 8.0)) / 2.0);
                    for color in row {
                        let (_, rect) = ui.allocate_space(tile_size);
                        ui.painter().rect_filled(rect, Rounding::same(6.0), *color);
                        ui.add_space(8.0);
                    }
                });
                ui.add_space(8.0);
            }
        });
    }
}

/// A page whose content arrives from a background task; the container shows
/// its fallback until the load finishes
struct SlowPage {
    content: Arc<RwLock<Option<Vec<String>>>>,
}

impl SlowPage {
    fn new(runtime: &tokio::runtime::Handle) -> Self {
        let content = Arc::new(RwLock::new(None));

        let slot = content.clone();
        runtime.spawn(async move {
            // Stand-in for a real fetch
            tokio::time::sleep(Duration::from_millis(1500)).await;
            let entries = (1..=8)
                .map(|i| format!("Release note #{i}: smoother slides, fewer dropped gestures"))
                .collect();
            *slot.write() = Some(entries);
            info!("slow page content loaded");
        });

        Self { content }
    }
}

impl PageView for SlowPage {
    fn title(&self) -> &str {
        "Changelog"
    }

    fn is_ready(&self) -> bool {
        self.content.read().is_some()
    }

    fn ui(&mut self, ui: &mut Ui) {
        fill_background(ui, Color32::from_rgb(26, 24, 30));
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.heading("Changelog");
        });
        ui.add_space(24.0);

        if let Some(entries) = self.content.read().as_ref() {
            ui.vertical_centered(|ui| {
                for entry in entries {
                    ui.label(entry);
                    ui.add_space(6.0);
                }
            });
        }
    }
}

/// Last page
struct FinalePage;

impl PageView for FinalePage {
    fn title(&self) -> &str {
        "Fin"
    }

    fn ui(&mut self, ui: &mut Ui) {
        fill_background(ui, Color32::from_rgb(20, 28, 26));
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.4);
            ui.heading("That's every page");
            ui.add_space(8.0);
            ui.label(
                RichText::new("Navigation past either end is silently ignored")
                    .color(theme::muted_color()),
            );
        });
    }
}
