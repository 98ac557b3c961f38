//! Application shell: top bar with sibling navigation controls
//!
//! Everything here drives the pager exclusively through the shared
//! [`PagerHandle`], never through a direct reference to the container.

use crate::icons;
use egui::{Context, TopBottomPanel};
use pf_core::PagerHandle;

/// Render the top bar
pub fn top_bar(ctx: &Context, title: &str, handle: &PagerHandle) {
    TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.label(egui::RichText::new(title).strong());
            ui.separator();

            if ui
                .button(icons::PREV)
                .on_hover_text("Previous page (Up/Left arrow)")
                .clicked()
            {
                handle.prev();
            }
            if ui
                .button(icons::NEXT)
                .on_hover_text("Next page (Down/Right arrow)")
                .clicked()
            {
                handle.next();
            }

            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // Right-aligned settled-page readout
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match handle.page_count() {
                    Some(count) if count > 0 => {
                        ui.label(format!("Page {} of {}", handle.current_page() + 1, count));
                        if handle
                            .controller()
                            .map(|c| c.is_transitioning())
                            .unwrap_or(false)
                        {
                            ui.add(egui::Spinner::new());
                        }
                    }
                    _ => {
                        ui.label("No pages");
                    }
                }
            });
        });
    });
}
