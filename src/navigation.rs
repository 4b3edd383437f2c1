use crate::command_palette::CommandPalette;

pub trait Viewport {
    /// Smooth-scrolls the element tagged `id` to the top of the viewport.
    /// Returns false when the page has no such element.
    fn scroll_to(&self, id: &str) -> bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WebViewport;

impl Viewport for WebViewport {
    #[cfg(target_arch = "wasm32")]
    fn scroll_to(&self, id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn scroll_to(&self, _id: &str) -> bool {
        false
    }
}

/// Open/closed flags of the page overlays. The two are independent: opening one
/// never closes the other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overlays {
    pub menu_open: bool,
    pub palette: CommandPalette,
}

impl Overlays {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    fn close_all(&mut self) {
        self.menu_open = false;
        self.palette.close();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationController<V> {
    viewport: V,
}

impl<V: Viewport> NavigationController<V> {
    pub fn new(viewport: V) -> Self {
        Self { viewport }
    }

    /// Scrolls to `id` and closes the overlays. Unknown ids change nothing.
    pub fn navigate_to(&self, id: &str, overlays: &mut Overlays) -> bool {
        if !self.viewport.scroll_to(id) {
            tracing::debug!("navigate: no section tagged {id}");
            return false;
        }
        overlays.close_all();
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct FakeViewport {
        pub ids: Vec<&'static str>,
        pub scrolled: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        pub(crate) fn with_ids(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for &FakeViewport {
        fn scroll_to(&self, id: &str) -> bool {
            if !self.ids.iter().any(|known| *known == id) {
                return false;
            }
            self.scrolled.borrow_mut().push(id.to_string());
            true
        }
    }

    fn all_open() -> Overlays {
        let mut overlays = Overlays::default();
        overlays.toggle_menu();
        overlays.palette.toggle();
        overlays
    }

    #[test]
    fn missing_target_leaves_overlays_alone() {
        let viewport = FakeViewport::with_ids(&["about"]);
        let controller = NavigationController::new(&viewport);
        let mut overlays = all_open();
        assert!(!controller.navigate_to("nonexistent-id", &mut overlays));
        assert_eq!(overlays, all_open());
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn found_target_scrolls_and_closes_overlays() {
        let viewport = FakeViewport::with_ids(&["home", "contact"]);
        let controller = NavigationController::new(&viewport);
        let mut overlays = all_open();
        assert!(controller.navigate_to("contact", &mut overlays));
        assert!(!overlays.menu_open);
        assert!(!overlays.palette.is_open());
        assert_eq!(*viewport.scrolled.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn menu_and_palette_open_independently() {
        let mut overlays = Overlays::default();
        overlays.toggle_menu();
        overlays.palette.toggle();
        assert!(overlays.menu_open);
        assert!(overlays.palette.is_open());
        overlays.toggle_menu();
        assert!(overlays.palette.is_open());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_viewport_never_finds_targets() {
        let controller = NavigationController::new(WebViewport);
        let mut overlays = Overlays::default();
        assert!(!controller.navigate_to("about", &mut overlays));
    }
}
