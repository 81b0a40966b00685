use std::cell::Cell;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use folio_core::effects::INTERACTIVE_TRANSITION;

use crate::config::{INTERACTIVE_SELECTOR, LOADER_FADE_MS, LOADER_HOLD_MS};
use crate::dom;
use crate::styles;

const LOADER_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
    background: #ffffff; z-index: 9999; display: flex; align-items: center; \
    justify-content: center; opacity: 1; \
    transition: opacity 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94);";

const SPINNER_CSS: &str = "width: 60px; height: 60px; border: 3px solid #f5f5f7; \
    border-top: 3px solid #007aff; border-radius: 50%; animation: spin 1s linear infinite;";

thread_local! {
    static LOADER_SHOWN: Cell<bool> = Cell::new(false);
}

pub(crate) fn prime_transitions() {
    for element in dom::query_all(INTERACTIVE_SELECTOR) {
        dom::set_style(&element, "transition", INTERACTIVE_TRANSITION);
    }
}

/// Window-load hook: marks the body loaded and runs the loader overlay once.
pub(crate) fn page_loaded() {
    let already_shown = LOADER_SHOWN.with(|flag| flag.replace(true));
    if already_shown {
        return;
    }
    if let Some(body) = dom::body() {
        dom::add_class(&body, "loaded");
    }
    if let Err(err) = show_loader() {
        gloo::console::warn!("boot: loader failed", dom::js_err(err));
    }
}

fn show_loader() -> Result<(), JsValue> {
    let document = dom::document().ok_or_else(|| JsValue::from_str("missing document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("missing body"))?;

    let loader = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    loader.style().set_css_text(LOADER_CSS);
    let spinner = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    spinner.style().set_css_text(SPINNER_CSS);
    loader.append_child(&spinner)?;

    styles::inject(styles::SPIN_CSS)?;
    body.append_child(&loader)?;

    spawn_local(async move {
        TimeoutFuture::new(LOADER_HOLD_MS).await;
        dom::set_style(&loader, "opacity", "0");
        TimeoutFuture::new(LOADER_FADE_MS).await;
        if loader.parent_node().is_some() {
            loader.remove();
        }
    });
    Ok(())
}
