//! Mobile menu and service-modal visibility, plus the page scroll lock they share.

use crate::catalog::ServiceCategory;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Something that can stop the page behind an overlay from scrolling
pub trait ScrollSurface {
    fn set_scroll_locked(&self, locked: bool);
}

/// Shared page-level scroll flag the renderer consults
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    locked: Arc<AtomicBool>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }
}

impl ScrollSurface for PageScroll {
    fn set_scroll_locked(&self, locked: bool) {
        self.locked.store(locked, Ordering::SeqCst);
    }
}

/// Owned handle on the page scroll lock.
///
/// Released when created and released again when dropped, so a remount never
/// inherits a locked page.
#[derive(Debug)]
pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
    engaged: bool,
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn new(surface: S) -> Self {
        surface.set_scroll_locked(false);
        Self {
            surface,
            engaged: false,
        }
    }

    /// Make the lock match `engaged`. Writes through every time.
    pub fn sync(&mut self, engaged: bool) {
        self.engaged = engaged;
        self.surface.set_scroll_locked(engaged);
    }

    pub fn release(&mut self) {
        self.sync(false);
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Visibility of the mobile menu and the category detail modal
#[derive(Debug)]
pub struct NavigationController<S: ScrollSurface> {
    mobile_menu_open: bool,
    selected_category: Option<&'static ServiceCategory>,
    lock: ScrollLock<S>,
}

impl<S: ScrollSurface> NavigationController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            mobile_menu_open: false,
            selected_category: None,
            lock: ScrollLock::new(surface),
        }
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn selected_category(&self) -> Option<&'static ServiceCategory> {
        self.selected_category
    }

    pub fn scroll_locked(&self) -> bool {
        self.lock.is_engaged()
    }

    pub fn surface(&self) -> &S {
        self.lock.surface()
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.refresh_lock();
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
        self.refresh_lock();
    }

    /// Show `category` in the modal, replacing whatever was shown before
    pub fn open_category(&mut self, category: &'static ServiceCategory) {
        debug!("Opening service category {}", category.id);
        self.selected_category = Some(category);
        self.refresh_lock();
    }

    pub fn close_category(&mut self) {
        self.selected_category = None;
        self.refresh_lock();
    }

    /// Release the scroll lock no matter what is open
    pub fn teardown(&mut self) {
        self.lock.release();
    }

    fn refresh_lock(&mut self) {
        let engaged = self.mobile_menu_open || self.selected_category.is_some();
        self.lock.sync(engaged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_category, SERVICE_CATEGORIES};

    #[test]
    fn test_menu_toggle_drives_lock() {
        let scroll = PageScroll::new();
        let mut nav = NavigationController::new(scroll.clone());
        nav.toggle_mobile_menu();
        assert!(nav.mobile_menu_open());
        assert!(scroll.is_locked());
        nav.toggle_mobile_menu();
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_closing_menu_keeps_lock_while_modal_open() {
        let scroll = PageScroll::new();
        let mut nav = NavigationController::new(scroll.clone());
        nav.toggle_mobile_menu();
        nav.open_category(&SERVICE_CATEGORIES[0]);
        nav.close_mobile_menu();
        assert!(scroll.is_locked());
        nav.close_category();
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_open_category_replaces_previous() {
        let mut nav = NavigationController::new(PageScroll::new());
        let a = find_category("skilled-nursing").unwrap();
        let b = find_category("personal-care").unwrap();
        nav.open_category(a);
        nav.open_category(b);
        assert_eq!(nav.selected_category().map(|c| c.id), Some("personal-care"));
    }

    #[test]
    fn test_mount_releases_stale_lock() {
        let scroll = PageScroll::new();
        scroll.set_scroll_locked(true);
        let _nav = NavigationController::new(scroll.clone());
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_drop_releases_lock() {
        let scroll = PageScroll::new();
        {
            let mut nav = NavigationController::new(scroll.clone());
            nav.open_category(&SERVICE_CATEGORIES[1]);
            assert!(scroll.is_locked());
        }
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_teardown_releases_even_with_menu_open() {
        let scroll = PageScroll::new();
        let mut nav = NavigationController::new(scroll.clone());
        nav.toggle_mobile_menu();
        nav.teardown();
        assert!(!scroll.is_locked());
    }
}
