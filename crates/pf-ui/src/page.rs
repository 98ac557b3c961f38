//! Page view abstraction - base trait for container pages

use egui::Ui;

/// One unit of content occupying the full container surface at a time
///
/// The page set is fixed when the container is created; pages are not added
/// or removed afterwards.
pub trait PageView: Send + Sync {
    /// Short name shown by indicators and logs
    fn title(&self) -> &str;

    /// Whether the page's content is available yet. A page that is still
    /// loading renders the container's fallback content instead.
    fn is_ready(&self) -> bool {
        true
    }

    /// Draw the page into its slot
    fn ui(&mut self, ui: &mut Ui);
}
