use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use folio_core::scroll::NAV_SCROLL_OFFSET;

use crate::config::NAV_LINK_SELECTOR;
use crate::dom;

const OPEN_CLASS: &str = "active";

struct MobileMenu {
    toggle: HtmlElement,
    menu: HtmlElement,
}

impl MobileMenu {
    fn lookup() -> Option<Self> {
        Some(Self {
            toggle: dom::by_id("nav-toggle")?,
            menu: dom::by_id("nav-menu")?,
        })
    }

    fn is_open(&self) -> bool {
        dom::has_class(&self.menu, OPEN_CLASS)
    }

    fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            dom::add_class(&self.menu, OPEN_CLASS);
            dom::add_class(&self.toggle, OPEN_CLASS);
            lock_body_scroll(true);
        }
    }

    fn close(&self) {
        dom::remove_class(&self.menu, OPEN_CLASS);
        dom::remove_class(&self.toggle, OPEN_CLASS);
        lock_body_scroll(false);
    }
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = dom::body() else {
        return;
    };
    if locked {
        dom::set_style(&body, "overflow", "hidden");
    } else {
        dom::clear_style(&body, "overflow");
    }
}

/// Mobile menu toggling and smooth in-page anchor scrolling.
pub(crate) struct Navigation {
    listeners: Vec<EventListener>,
}

impl Navigation {
    pub(crate) fn install() -> Self {
        let mut listeners = Vec::new();

        if let Some(menu) = MobileMenu::lookup().map(Rc::new) {
            let handler = Rc::clone(&menu);
            listeners.push(EventListener::new(&menu.toggle, "click", move |_| {
                handler.toggle();
            }));
            for link in dom::query_all(NAV_LINK_SELECTOR) {
                let handler = Rc::clone(&menu);
                listeners.push(EventListener::new(&link, "click", move |_| {
                    handler.close();
                }));
            }
        } else {
            gloo::console::log!("nav: mobile toggle not present");
        }

        for anchor in dom::query_all("a[href^=\"#\"]") {
            let target = anchor.clone();
            listeners.push(EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let Some(href) = target.get_attribute("href") else {
                        return;
                    };
                    scroll_to_fragment(&href);
                },
            ));
        }

        Self { listeners }
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Smooth-scrolls so `#id` lands just below the fixed navbar. Unknown or
/// malformed fragments are ignored.
fn scroll_to_fragment(fragment: &str) {
    let Some(target) = dom::query(fragment) else {
        return;
    };
    let Some(window) = dom::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(f64::from(target.offset_top()) - NAV_SCROLL_OFFSET);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(tag: &str, id: &str) -> HtmlElement {
        let document = dom::document().expect("document");
        let element = document
            .create_element(tag)
            .expect("element")
            .dyn_into::<HtmlElement>()
            .expect("html element");
        element.set_id(id);
        document.body().expect("body").append_child(&element).expect("append");
        element
    }

    #[wasm_bindgen_test]
    fn toggle_locks_body_and_link_click_closes() {
        let toggle = mount("button", "nav-toggle");
        let menu = mount("ul", "nav-menu");
        let link = mount("a", "nav-test-link");
        link.set_class_name("nav-link");
        let _navigation = Navigation::install();
        let body = dom::body().expect("body");

        toggle.click();
        assert!(dom::has_class(&menu, OPEN_CLASS));
        assert!(dom::has_class(&toggle, OPEN_CLASS));
        assert_eq!(body.style().get_property_value("overflow").ok().as_deref(), Some("hidden"));

        link.click();
        assert!(!dom::has_class(&menu, OPEN_CLASS));
        assert_eq!(body.style().get_property_value("overflow").ok().as_deref(), Some(""));

        toggle.remove();
        menu.remove();
        link.remove();
    }

    #[wasm_bindgen_test]
    fn malformed_fragment_is_ignored() {
        scroll_to_fragment("#");
        scroll_to_fragment("#does-not-exist");
    }
}
