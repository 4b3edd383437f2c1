use dioxus::prelude::*;

use crate::i18n::{text, Locale, UiKey};
use crate::navigation::{NavigationController, Overlays, Viewport, WebViewport};
use crate::sections::{filter_sections, list_sections, SectionDescriptor};
#[cfg(target_arch = "wasm32")]
use crate::subscription::Subscription;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Toggled,
    Closed,
    Ignored,
}

impl KeyOutcome {
    /// Only the shortcut suppresses the browser's own handling.
    pub fn prevents_default(self) -> bool {
        self == KeyOutcome::Toggled
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandPalette {
    open: bool,
    query: String,
}

impl CommandPalette {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing keeps the query; it reappears on the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn outcome_for(&self, press: KeyPress<'_>) -> KeyOutcome {
        let modified = press.ctrl || press.meta;
        if modified && press.key.eq_ignore_ascii_case("k") {
            return KeyOutcome::Toggled;
        }
        if !modified && press.key == "Escape" && self.open {
            return KeyOutcome::Closed;
        }
        KeyOutcome::Ignored
    }

    pub fn apply(&mut self, outcome: KeyOutcome) {
        match outcome {
            KeyOutcome::Toggled => self.toggle(),
            KeyOutcome::Closed => self.close(),
            KeyOutcome::Ignored => {}
        }
    }

    #[cfg(test)]
    pub fn handle_key(&mut self, press: KeyPress<'_>) -> KeyOutcome {
        let outcome = self.outcome_for(press);
        self.apply(outcome);
        outcome
    }

    pub fn visible(&self, sections: &[SectionDescriptor]) -> Vec<SectionDescriptor> {
        filter_sections(sections, &self.query)
    }
}

/// Jumps to the chosen section, then closes the palette and forgets the query.
pub fn select_section<V: Viewport>(
    overlays: &mut Overlays,
    controller: &NavigationController<V>,
    id: &str,
) -> bool {
    let found = controller.navigate_to(id, overlays);
    overlays.palette.close();
    overlays.palette.query.clear();
    found
}

/// Keeps the document-level Ctrl/Cmd+K and Escape listener attached while the
/// calling component is mounted.
pub fn use_palette_shortcut(overlays: Signal<Overlays>) {
    #[cfg(target_arch = "wasm32")]
    {
        let mut listener = use_signal(|| None::<Subscription>);
        use_effect(move || {
            if listener.peek().is_some() {
                return;
            }
            listener.set(attach_shortcut_listener(overlays));
        });
        use_drop(move || {
            if let Some(mut subscription) = listener.write().take() {
                subscription.dispose();
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = overlays;
}

#[cfg(target_arch = "wasm32")]
fn attach_shortcut_listener(mut overlays: Signal<Overlays>) -> Option<Subscription> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        let key = event.key();
        let press = KeyPress {
            key: &key,
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
        };
        let outcome = overlays.peek().palette.outcome_for(press);
        if outcome == KeyOutcome::Ignored {
            return;
        }
        if outcome.prevents_default() {
            event.prevent_default();
        }
        overlays.write().palette.apply(outcome);
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    document
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .ok()?;
    let target = document.clone();
    Some(Subscription::new("palette-shortcut", move || {
        let _ = target
            .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }))
}

#[component]
pub fn CommandPaletteOverlay(mut overlays: Signal<Overlays>, locale: Locale) -> Element {
    if !overlays.read().palette.is_open() {
        return rsx! {};
    }
    let sections = list_sections(locale);
    let query = overlays.read().palette.query().to_string();
    let items = overlays.read().palette.visible(&sections);
    let no_results = items.is_empty();
    let placeholder = text(locale, UiKey::PaletteHint);
    let empty_label = text(locale, UiKey::PaletteEmpty);

    rsx! {
        div {
            class: "palette-backdrop",
            onclick: move |_| overlays.write().palette.close(),
            div {
                class: "palette-panel glass",
                role: "dialog",
                aria_label: "Command palette",
                onclick: move |event| event.stop_propagation(),
                div { class: "palette-search",
                    span { class: "palette-icon", "⌕" }
                    input {
                        class: "palette-input",
                        autofocus: true,
                        value: "{query}",
                        placeholder: "{placeholder}",
                        oninput: move |event| overlays.write().palette.set_query(event.value()),
                    }
                    span { class: "kbd", "Esc" }
                }
                div { class: "palette-list",
                    for item in items {
                        button {
                            key: "{item.id}",
                            r#type: "button",
                            class: "palette-item",
                            onclick: move |_| {
                                let controller = NavigationController::new(WebViewport);
                                select_section(&mut overlays.write(), &controller, item.id);
                            },
                            span { "{item.label}" }
                            span { class: "palette-arrow", "→" }
                        }
                    }
                    if no_results {
                        div { class: "palette-empty", "{empty_label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::tests::FakeViewport;
    use pretty_assertions::assert_eq;

    fn shortcut(meta: bool) -> KeyPress<'static> {
        KeyPress {
            key: "k",
            ctrl: !meta,
            meta,
        }
    }

    const ESCAPE: KeyPress<'static> = KeyPress {
        key: "Escape",
        ctrl: false,
        meta: false,
    };

    #[test]
    fn shortcut_twice_restores_state() {
        let mut palette = CommandPalette::default();
        assert_eq!(palette.handle_key(shortcut(false)), KeyOutcome::Toggled);
        assert!(palette.is_open());
        assert_eq!(palette.handle_key(shortcut(true)), KeyOutcome::Toggled);
        assert!(!palette.is_open());
    }

    #[test]
    fn shortcut_accepts_uppercase_k_and_prevents_default() {
        let mut palette = CommandPalette::default();
        let outcome = palette.handle_key(KeyPress {
            key: "K",
            ctrl: true,
            meta: false,
        });
        assert!(outcome.prevents_default());
        assert!(palette.is_open());
    }

    #[test]
    fn escape_only_closes() {
        let mut palette = CommandPalette::default();
        assert_eq!(palette.handle_key(ESCAPE), KeyOutcome::Ignored);
        assert!(!palette.is_open());

        palette.open();
        assert_eq!(palette.handle_key(ESCAPE), KeyOutcome::Closed);
        assert!(!palette.is_open());
        assert!(!KeyOutcome::Closed.prevents_default());
    }

    #[test]
    fn escape_with_modifier_is_ignored() {
        let mut palette = CommandPalette::default();
        palette.open();
        let outcome = palette.handle_key(KeyPress {
            key: "Escape",
            ctrl: true,
            meta: false,
        });
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert!(palette.is_open());
    }

    #[test]
    fn plain_k_is_ignored() {
        let mut palette = CommandPalette::default();
        let outcome = palette.handle_key(KeyPress {
            key: "k",
            ctrl: false,
            meta: false,
        });
        assert_eq!(outcome, KeyOutcome::Ignored);
    }

    #[test]
    fn query_survives_toggling() {
        let mut palette = CommandPalette::default();
        palette.open();
        palette.set_query("blo".to_string());
        palette.close();
        palette.open();
        assert_eq!(palette.query(), "blo");
    }

    #[test]
    fn visible_items_filter_the_registry() {
        let mut palette = CommandPalette::default();
        palette.set_query("PRO".to_string());
        let ids: Vec<&str> = palette
            .visible(&list_sections(Locale::Id))
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec!["projects"]);

        palette.set_query("nothing here".to_string());
        assert!(palette.visible(&list_sections(Locale::En)).is_empty());
    }

    #[test]
    fn selecting_navigates_then_closes_and_clears_query() {
        let viewport = FakeViewport::with_ids(&["blog"]);
        let controller = NavigationController::new(&viewport);
        let mut overlays = Overlays::default();
        overlays.palette.open();
        overlays.palette.set_query("bl".to_string());

        assert!(select_section(&mut overlays, &controller, "blog"));
        assert!(!overlays.palette.is_open());
        assert_eq!(overlays.palette.query(), "");
        assert_eq!(*viewport.scrolled.borrow(), vec!["blog".to_string()]);
    }

    #[test]
    fn selecting_a_missing_section_still_closes_the_palette() {
        let viewport = FakeViewport::with_ids(&[]);
        let controller = NavigationController::new(&viewport);
        let mut overlays = Overlays::default();
        overlays.toggle_menu();
        overlays.palette.open();

        assert!(!select_section(&mut overlays, &controller, "about"));
        assert!(!overlays.palette.is_open());
        assert!(overlays.menu_open);
    }
}
