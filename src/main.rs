mod boot;
mod config;
mod contact;
mod dom;
mod interactions;
mod nav;
mod notification;
mod reveal;
mod scroll_effects;
mod styles;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;

use crate::contact::ContactForm;
use crate::interactions::Interactions;
use crate::nav::Navigation;
use crate::notification::NotificationPresenter;
use crate::reveal::RevealObserver;
use crate::scroll_effects::ScrollEffects;

/// Everything wired at DOM ready. Held for the lifetime of the page so the
/// listeners, observer and timers it owns stay registered.
struct Page {
    _notifications: Rc<NotificationPresenter>,
    _navigation: Navigation,
    _scroll: Rc<ScrollEffects>,
    _reveal: Option<RevealObserver>,
    _interactions: Interactions,
    _contact: Option<(Rc<ContactForm>, EventListener)>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

fn start() {
    config::set_page_config(config::load_page_config());
    let page_config = config::page_config();

    boot::prime_transitions();

    let notifications = NotificationPresenter::new(page_config.notifications.clone());
    let navigation = Navigation::install();
    let scroll = ScrollEffects::install();
    scroll.update_active_link();

    let reveal = match RevealObserver::install(config::REVEAL_SELECTOR) {
        Ok(reveal) => Some(reveal),
        Err(err) => {
            gloo::console::warn!("reveal: observer unavailable", dom::js_err(err));
            None
        }
    };
    let interactions = Interactions::install();
    let contact = ContactForm::install(Rc::clone(&notifications), page_config.contact_endpoint);
    gloo::console::log!(
        "boot: wired",
        navigation.listener_count() as u32,
        interactions.listener_count() as u32
    );

    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(Page {
            _notifications: notifications,
            _navigation: navigation,
            _scroll: scroll,
            _reveal: reveal,
            _interactions: interactions,
            _contact: contact,
        });
    });
}

fn main() {
    if let Err(err) = styles::inject(styles::ENHANCEMENT_CSS) {
        gloo::console::warn!("boot: stylesheet injection failed", dom::js_err(err));
    }
    dom::on_dom_ready(start);
    dom::on_window_load(boot::page_loaded);
}
