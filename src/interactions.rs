use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use folio_core::effects::{
    floating_card_timing, seconds, Tilt, FLOATING_HOVER_TRANSFORM, FLOATING_REST_TRANSFORM,
    SKILL_HOVER_SHADOW, SKILL_HOVER_TRANSFORM, SKILL_REST_SHADOW, SKILL_REST_TRANSFORM, TILT_RESET,
};

use crate::dom;

/// Hover and tilt listeners for badges and cards. Dropping this unhooks them all.
pub(crate) struct Interactions {
    listeners: Vec<EventListener>,
}

impl Interactions {
    pub(crate) fn install() -> Self {
        let mut listeners = Vec::new();
        for item in dom::query_all(".skill-item") {
            wire_skill_item(&item, &mut listeners);
        }
        for (index, card) in dom::query_all(".floating-card").into_iter().enumerate() {
            wire_floating_card(&card, index, &mut listeners);
        }
        for card in dom::query_all(".project-card") {
            wire_project_card(&card, &mut listeners);
        }
        Self { listeners }
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

fn wire_skill_item(item: &HtmlElement, listeners: &mut Vec<EventListener>) {
    let target = item.clone();
    listeners.push(EventListener::new(item, "mouseenter", move |_| {
        dom::set_style(&target, "transform", SKILL_HOVER_TRANSFORM);
        dom::set_style(&target, "box-shadow", SKILL_HOVER_SHADOW);
    }));
    let target = item.clone();
    listeners.push(EventListener::new(item, "mouseleave", move |_| {
        dom::set_style(&target, "transform", SKILL_REST_TRANSFORM);
        dom::set_style(&target, "box-shadow", SKILL_REST_SHADOW);
    }));
}

fn wire_floating_card(card: &HtmlElement, index: usize, listeners: &mut Vec<EventListener>) {
    let (delay, duration) = floating_card_timing(index);
    dom::set_style(card, "animation-delay", &seconds(delay));
    dom::set_style(card, "animation-duration", &seconds(duration));

    let target = card.clone();
    listeners.push(EventListener::new(card, "mouseenter", move |_| {
        dom::set_style(&target, "animation-play-state", "paused");
        dom::set_style(&target, "transform", FLOATING_HOVER_TRANSFORM);
    }));
    let target = card.clone();
    listeners.push(EventListener::new(card, "mouseleave", move |_| {
        dom::set_style(&target, "animation-play-state", "running");
        dom::set_style(&target, "transform", FLOATING_REST_TRANSFORM);
    }));
}

fn wire_project_card(card: &HtmlElement, listeners: &mut Vec<EventListener>) {
    let target = card.clone();
    listeners.push(EventListener::new(card, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let rect = target.get_bounding_client_rect();
        let x = f64::from(event.client_x()) - rect.left();
        let y = f64::from(event.client_y()) - rect.top();
        let tilt = Tilt::from_pointer(x, y, rect.width(), rect.height());
        dom::set_style(&target, "transform", &tilt.transform());
    }));
    let target = card.clone();
    listeners.push(EventListener::new(card, "mouseleave", move |_| {
        dom::set_style(&target, "transform", TILT_RESET);
    }));
}
