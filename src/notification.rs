use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use folio_core::notification::{SLIDE_IN_TRANSFORM, SLIDE_OUT_TRANSFORM};
use folio_core::{NoticeId, NotificationSlot, Severity};

use crate::config::NotificationTiming;
use crate::dom;

struct LiveNotice {
    id: NoticeId,
    element: HtmlElement,
    enter_frame: Option<AnimationFrame>,
    auto_dismiss: Option<Timeout>,
    removal: Option<Timeout>,
    _close: EventListener,
}

impl LiveNotice {
    /// Removes the element and cancels whatever frame or timers are still pending.
    fn detach(self) {
        self.element.remove();
        drop((self.enter_frame, self.auto_dismiss, self.removal));
    }
}

/// The page's single toast. Showing a new message tears down the previous one
/// and drops its timers.
pub(crate) struct NotificationPresenter {
    slot: RefCell<NotificationSlot>,
    live: RefCell<Option<LiveNotice>>,
    timing: NotificationTiming,
}

impl NotificationPresenter {
    pub(crate) fn new(timing: NotificationTiming) -> Rc<Self> {
        Rc::new(Self {
            slot: RefCell::new(NotificationSlot::new()),
            live: RefCell::new(None),
            timing,
        })
    }

    pub(crate) fn show(self: &Rc<Self>, message: &str, severity: Severity) -> Option<NoticeId> {
        let outcome = self.slot.borrow_mut().show(message, severity);
        if outcome.replaced.is_some() {
            let previous = self.live.borrow_mut().take();
            if let Some(previous) = previous {
                previous.detach();
            }
        }
        match self.mount(outcome.id, message, severity) {
            Ok(notice) => {
                *self.live.borrow_mut() = Some(notice);
                Some(outcome.id)
            }
            Err(err) => {
                gloo::console::warn!("notification: mount failed", dom::js_err(err));
                self.slot.borrow_mut().finish_removal(outcome.id);
                None
            }
        }
    }

    /// Slides the notice out and schedules its removal. Repeat calls are ignored.
    pub(crate) fn dismiss(self: &Rc<Self>, id: NoticeId) {
        if !self.slot.borrow_mut().begin_dismiss(id) {
            return;
        }
        let cancelled = {
            let mut live = self.live.borrow_mut();
            let Some(notice) = live.as_mut().filter(|notice| notice.id == id) else {
                return;
            };
            dom::set_style(&notice.element, "transform", SLIDE_OUT_TRANSFORM);
            let presenter = Rc::clone(self);
            notice.removal = Some(Timeout::new(self.timing.slide_ms, move || {
                presenter.remove(id);
            }));
            (notice.auto_dismiss.take(), notice.enter_frame.take())
        };
        drop(cancelled);
    }

    fn remove(&self, id: NoticeId) {
        if !self.slot.borrow_mut().finish_removal(id) {
            return;
        }
        let notice = self.live.borrow_mut().take();
        if let Some(notice) = notice {
            notice.detach();
        }
    }

    #[cfg(test)]
    pub(crate) fn live_id(&self) -> Option<NoticeId> {
        self.live.borrow().as_ref().map(|notice| notice.id)
    }

    #[cfg(test)]
    pub(crate) fn clear(&self) {
        let live = self.live_id();
        if let Some(id) = live {
            self.remove(id);
        }
    }

    fn mount(
        self: &Rc<Self>,
        id: NoticeId,
        message: &str,
        severity: Severity,
    ) -> Result<LiveNotice, JsValue> {
        let document = dom::document().ok_or_else(|| JsValue::from_str("missing document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("missing body"))?;

        let element = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        element.set_class_name(&format!("notification notification-{}", severity.as_str()));
        element.style().set_css_text(&notification_css(severity, self.timing.slide_ms));

        let content = document.create_element("div")?;
        content.set_class_name("notification-content");
        let text = document.create_element("span")?;
        text.set_class_name("notification-message");
        text.set_text_content(Some(message));
        let close = document.create_element("button")?;
        close.set_class_name("notification-close");
        close.set_text_content(Some("\u{00d7}"));
        content.append_child(&text)?;
        content.append_child(&close)?;
        element.append_child(&content)?;
        body.append_child(&element)?;

        let entering = element.clone();
        let enter_frame = request_animation_frame(move |_| {
            dom::set_style(&entering, "transform", SLIDE_IN_TRANSFORM);
        });

        let presenter = Rc::clone(self);
        let close_listener = EventListener::new(&close, "click", move |_| {
            presenter.dismiss(id);
        });

        let presenter = Rc::clone(self);
        let auto_dismiss = Timeout::new(self.timing.auto_dismiss_ms, move || {
            presenter.dismiss(id);
        });

        Ok(LiveNotice {
            id,
            element,
            enter_frame: Some(enter_frame),
            auto_dismiss: Some(auto_dismiss),
            removal: None,
            _close: close_listener,
        })
    }
}

fn notification_css(severity: Severity, slide_ms: u32) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; background: {background}; color: white; \
         padding: 16px 20px; border-radius: 12px; box-shadow: 0 8px 32px rgba(0, 0, 0, 0.2); \
         z-index: 10000; transform: {hidden}; \
         transition: transform {slide_ms}ms cubic-bezier(0.25, 0.46, 0.45, 0.94); \
         max-width: 400px; backdrop-filter: saturate(180%) blur(20px); \
         border: 1px solid rgba(255, 255, 255, 0.2);",
        background = severity.background(),
        hidden = SLIDE_OUT_TRANSFORM,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn notification_count() -> u32 {
        dom::document()
            .and_then(|document| document.query_selector_all(".notification").ok())
            .map(|list| list.length())
            .unwrap_or(0)
    }

    fn quick_timing() -> NotificationTiming {
        NotificationTiming {
            auto_dismiss_ms: 60,
            slide_ms: 10,
        }
    }

    #[wasm_bindgen_test]
    fn back_to_back_show_keeps_one_element() {
        let presenter = NotificationPresenter::new(NotificationTiming::default());
        presenter.show("first", Severity::Info);
        let second = presenter.show("second", Severity::Error);
        assert_eq!(notification_count(), 1);
        assert_eq!(presenter.live_id(), second);
        let element = dom::query(".notification").expect("notification element");
        assert!(element.class_list().contains("notification-error"));
        if let Some(id) = second {
            presenter.remove(id);
        }
        assert_eq!(notification_count(), 0);
    }

    #[wasm_bindgen_test]
    fn message_is_inserted_as_text() {
        let presenter = NotificationPresenter::new(NotificationTiming::default());
        let id = presenter.show("<b>hi</b>", Severity::Success).expect("shown");
        let message = dom::query(".notification-message").expect("message span");
        assert_eq!(message.text_content().as_deref(), Some("<b>hi</b>"));
        assert!(message.first_element_child().is_none());
        presenter.remove(id);
    }

    #[wasm_bindgen_test]
    async fn auto_dismiss_after_manual_close_is_noop() {
        let presenter = NotificationPresenter::new(quick_timing());
        let first = presenter.show("first", Severity::Info).expect("shown");
        presenter.dismiss(first);
        presenter.dismiss(first);
        TimeoutFuture::new(30).await;
        assert_eq!(notification_count(), 0);

        let second = presenter.show("second", Severity::Success).expect("shown");
        // the first notice's auto-dismiss deadline passes here
        TimeoutFuture::new(40).await;
        assert_eq!(presenter.live_id(), Some(second));
        assert_eq!(notification_count(), 1);
        presenter.remove(second);
    }

    #[wasm_bindgen_test]
    async fn auto_dismiss_removes_after_slide() {
        let presenter = NotificationPresenter::new(quick_timing());
        presenter.show("bye", Severity::Info).expect("shown");
        TimeoutFuture::new(120).await;
        assert_eq!(notification_count(), 0);
        assert_eq!(presenter.live_id(), None);
    }
}
