use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::HtmlElement;

use folio_core::scroll::{nav_href_matches, navbar_transform, parallax_transform};
use folio_core::{active_section, ScrollState};

use crate::config::NAV_LINK_SELECTOR;
use crate::dom;

const ACTIVE_CLASS: &str = "active";

/// Owns the scroll bookkeeping and every scroll-driven style change: navbar
/// appearance and auto-hide, hero parallax, and the active nav link.
pub(crate) struct ScrollEffects {
    state: RefCell<ScrollState>,
    frame: RefCell<Option<AnimationFrame>>,
    navbar: Option<HtmlElement>,
    hero_visual: Option<HtmlElement>,
    sections: Vec<HtmlElement>,
    nav_links: Vec<HtmlElement>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ScrollEffects {
    pub(crate) fn install() -> Rc<Self> {
        let hero_visual = match (dom::query(".hero"), dom::query(".hero-visual")) {
            (Some(_), Some(visual)) => Some(visual),
            _ => None,
        };
        let effects = Rc::new(Self {
            state: RefCell::new(ScrollState::new(dom::scroll_y())),
            frame: RefCell::new(None),
            navbar: dom::query(".navbar"),
            hero_visual,
            sections: dom::query_all("section"),
            nav_links: dom::query_all(NAV_LINK_SELECTOR),
            listeners: RefCell::new(Vec::new()),
        });
        if effects.navbar.is_none() {
            gloo::console::log!("scroll: no .navbar on page");
        }

        let Some(window) = dom::window() else {
            return effects;
        };
        let handler = Rc::clone(&effects);
        let listener = EventListener::new_with_options(
            &window,
            "scroll",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: true,
            },
            move |_| {
                handler.on_scroll();
            },
        );
        effects.listeners.borrow_mut().push(listener);
        effects
    }

    fn on_scroll(self: &Rc<Self>) {
        let current_y = dom::scroll_y();
        let update = self.state.borrow_mut().record(current_y);
        if let Some(navbar) = self.navbar.as_ref() {
            dom::set_style(navbar, "background", update.appearance.background);
            dom::set_style(navbar, "backdrop-filter", update.appearance.backdrop_filter);
            dom::set_style(navbar, "border-bottom", update.appearance.border_bottom);
            dom::set_style(navbar, "transform", navbar_transform(update.hidden));
        }
        if let Some(visual) = self.hero_visual.as_ref() {
            dom::set_style(visual, "transform", &parallax_transform(current_y));
        }
        self.schedule_active_update();
    }

    /// At most one active-link pass per rendered frame.
    fn schedule_active_update(self: &Rc<Self>) {
        if !self.state.borrow_mut().request_frame() {
            return;
        }
        let effects = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            effects.frame.borrow_mut().take();
            effects.state.borrow_mut().frame_done();
            effects.refresh_active_link(false);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    /// Recomputes the active section and restyles every nav link.
    pub(crate) fn update_active_link(&self) {
        self.refresh_active_link(true);
    }

    /// Link classes are only rewritten when the active section moved, or
    /// when `force` is set.
    fn refresh_active_link(&self, force: bool) {
        let scroll_y = dom::scroll_y();
        let bounds: Vec<(Option<String>, f64)> = self
            .sections
            .iter()
            .map(|section| (section.get_attribute("id"), f64::from(section.offset_top())))
            .collect();
        let active = active_section(
            bounds.iter().map(|(id, top)| (id.as_deref(), *top)),
            scroll_y,
        );
        let changed = self.state.borrow_mut().set_active_section(active);
        if !changed && !force {
            return;
        }
        for link in &self.nav_links {
            let href = link.get_attribute("href");
            dom::remove_class(link, ACTIVE_CLASS);
            if nav_href_matches(href.as_deref(), active) {
                dom::add_class(link, ACTIVE_CLASS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(html: &str) -> HtmlElement {
        let document = dom::document().expect("document");
        let holder = document
            .create_element("div")
            .expect("holder")
            .dyn_into::<HtmlElement>()
            .expect("html element");
        holder.set_inner_html(html);
        document.body().expect("body").append_child(&holder).expect("append");
        holder
    }

    #[wasm_bindgen_test]
    fn link_classes_follow_section_changes_only() {
        let holder = mount(
            r##"<section id="about" style="position:absolute;top:0"></section>
                <a class="nav-link" href="#about">About</a>"##,
        );
        let link = dom::query(".nav-link").expect("nav link");
        let effects = ScrollEffects::install();

        effects.update_active_link();
        assert!(dom::has_class(&link, ACTIVE_CLASS));

        dom::remove_class(&link, ACTIVE_CLASS);
        effects.refresh_active_link(false);
        assert!(!dom::has_class(&link, ACTIVE_CLASS));

        effects.update_active_link();
        assert!(dom::has_class(&link, ACTIVE_CLASS));
        holder.remove();
    }
}
