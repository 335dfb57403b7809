//! Navigation context shared by the chrome and page units.
//!
//! One value, owned by the application root and handed down by reference.
//! Readers get the current page and device class; the only writers are
//! `navigate`, `go_back` and `resize`.

use serde::Serialize;

use crate::click_map;
use crate::device::{DeviceClass, DeviceClassifier, RootMarkers};
use crate::history::NavigationStore;
use crate::page::{PageId, Route};
use crate::registry;
use crate::units::PageUnit;

/// Navigation state plus the latest device classification.
#[derive(Debug, Clone)]
pub struct NavigationContext {
    store: NavigationStore,
    device: DeviceClassifier,
}

impl NavigationContext {
    /// Mount at `home` with the viewport `width` pixels wide.
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self {
            store: NavigationStore::new(),
            device: DeviceClassifier::new(width),
        }
    }

    #[must_use]
    pub fn current_page(&self) -> &Route {
        self.store.current()
    }

    /// Whether `page` is the current page.
    #[must_use]
    pub fn is_current(&self, page: PageId) -> bool {
        self.store.current().is(page)
    }

    pub fn navigate(&mut self, route: impl Into<Route>) {
        self.store.navigate(route);
    }

    pub fn go_back(&mut self) -> bool {
        self.store.go_back()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.store.can_go_back()
    }

    #[must_use]
    pub fn history(&self) -> &[Route] {
        self.store.history()
    }

    /// Reclassify after a viewport resize.
    pub fn resize(&mut self, width: u32) -> DeviceClass {
        self.device.on_resize(width)
    }

    #[must_use]
    pub fn device(&self) -> DeviceClass {
        self.device.class()
    }

    #[must_use]
    pub fn viewport_width(&self) -> u32 {
        self.device.width()
    }

    #[must_use]
    pub fn markers(&self) -> RootMarkers {
        self.device.markers()
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.device.is_mobile()
    }

    #[must_use]
    pub fn is_tablet(&self) -> bool {
        self.device.is_tablet()
    }

    /// Page unit to mount for the current state.
    #[must_use]
    pub fn selected_unit(&self) -> PageUnit {
        registry::select(self.store.current(), self.device.class())
    }

    /// Interpret a click on text inside imported markup.
    ///
    /// Navigates and returns the target when the text is known, otherwise
    /// does nothing.
    pub fn click(&mut self, text: &str) -> Option<PageId> {
        let target = click_map::resolve(text)?;
        self.navigate(target);
        Some(target)
    }

    /// Activate the affordance at `index` of the mounted unit.
    pub fn activate(&mut self, index: usize) -> Option<PageId> {
        let target = self.selected_unit().activate(index)?;
        self.navigate(target);
        Some(target)
    }

    /// Serializable view of the whole context.
    #[must_use]
    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            current_page: self.current_page().clone(),
            history: self.history().to_vec(),
            can_go_back: self.can_go_back(),
            device: self.device(),
            viewport_width: self.viewport_width(),
            unit: self.selected_unit(),
            markers: self.markers().classes(),
        }
    }
}

/// Point-in-time copy of a [`NavigationContext`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSnapshot {
    pub current_page: Route,
    pub history: Vec<Route>,
    pub can_go_back: bool,
    pub device: DeviceClass,
    pub viewport_width: u32,
    pub unit: PageUnit,
    pub markers: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_at_home() {
        let ctx = NavigationContext::new(1280);
        assert!(ctx.is_current(PageId::Home));
        assert!(!ctx.can_go_back());
        assert_eq!(ctx.selected_unit(), PageUnit::AuthenticatedHome);
    }

    #[test]
    fn resize_swaps_home_unit() {
        let mut ctx = NavigationContext::new(1280);
        ctx.resize(375);
        assert!(ctx.is_mobile());
        assert_eq!(ctx.selected_unit(), PageUnit::MobileHome);
        ctx.resize(800);
        assert!(ctx.is_tablet());
        assert_eq!(ctx.selected_unit(), PageUnit::AuthenticatedHome);
    }

    #[test]
    fn resize_leaves_history_alone() {
        let mut ctx = NavigationContext::new(1280);
        ctx.navigate(PageId::Farming);
        ctx.resize(320);
        assert_eq!(ctx.history().len(), 2);
        assert!(ctx.is_current(PageId::Farming));
    }

    #[test]
    fn click_known_text_navigates() {
        let mut ctx = NavigationContext::new(1280);
        assert_eq!(ctx.click("Buy Now"), Some(PageId::Assets));
        assert!(ctx.is_current(PageId::Assets));
        assert_eq!(ctx.history().len(), 2);
    }

    #[test]
    fn click_unknown_text_is_ignored() {
        let mut ctx = NavigationContext::new(1280);
        assert_eq!(ctx.click("Connect Wallet"), None);
        assert_eq!(ctx.history().len(), 1);
    }

    #[test]
    fn activate_affordance_on_mounted_unit() {
        let mut ctx = NavigationContext::new(375);
        // Mobile home: "View Portfolio"
        assert_eq!(ctx.activate(1), Some(PageId::Portfolio));
        assert_eq!(ctx.selected_unit(), PageUnit::Portfolio);
        // Portfolio: "Export Report" is inert
        assert_eq!(ctx.activate(2), None);
        assert!(ctx.is_current(PageId::Portfolio));
    }

    #[test]
    fn unknown_page_renders_fallback() {
        let mut ctx = NavigationContext::new(375);
        ctx.navigate("nonexistent-id");
        assert_eq!(ctx.selected_unit(), PageUnit::AuthenticatedHome);
        assert_eq!(ctx.current_page().as_str(), "nonexistent-id");
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut ctx = NavigationContext::new(900);
        ctx.navigate(PageId::Support);
        let snap = ctx.snapshot();
        assert_eq!(snap.current_page, Route::Page(PageId::Support));
        assert_eq!(snap.history.len(), 2);
        assert!(snap.can_go_back);
        assert_eq!(snap.device, DeviceClass::Tablet);
        assert_eq!(snap.viewport_width, 900);
        assert_eq!(snap.unit, PageUnit::Support);
        assert_eq!(snap.markers, vec!["tablet-app"]);
    }

    #[test]
    fn snapshot_serializes() {
        let ctx = NavigationContext::new(1024);
        let json = serde_json::to_value(ctx.snapshot()).unwrap();
        assert_eq!(json["current_page"], "home");
        assert_eq!(json["device"], "desktop");
        assert_eq!(json["unit"], "authenticated-home");
        assert_eq!(json["markers"][0], "desktop-app");
    }
}
