use std::cell::RefCell;

use folio_core::{NOTIFICATION_AUTO_DISMISS_MS, NOTIFICATION_SLIDE_MS};

use crate::dom;

pub(crate) const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub(crate) const NAV_LINK_SELECTOR: &str = ".nav-link";
pub(crate) const REVEAL_SELECTOR: &str = ".skill-category, .project-card, .about-text, .contact-info, .contact-form, .highlight-item, .ed-timeline-item";
pub(crate) const INTERACTIVE_SELECTOR: &str = "a, button, .nav-link, .btn";

pub(crate) const LOADER_HOLD_MS: u32 = 1_200;
pub(crate) const LOADER_FADE_MS: u32 = 600;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NotificationTiming {
    pub(crate) auto_dismiss_ms: u32,
    pub(crate) slide_ms: u32,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: NOTIFICATION_AUTO_DISMISS_MS,
            slide_ms: NOTIFICATION_SLIDE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PageConfig {
    /// `data-endpoint` on the contact form; empty means mail-client only.
    pub(crate) contact_endpoint: String,
    pub(crate) notifications: NotificationTiming,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: String::new(),
            notifications: NotificationTiming::default(),
        }
    }
}

thread_local! {
    static PAGE_CONFIG: RefCell<Option<PageConfig>> = RefCell::new(None);
}

pub(crate) fn load_page_config() -> PageConfig {
    let contact_endpoint = dom::query(CONTACT_FORM_SELECTOR)
        .and_then(|form| form.dataset().get("endpoint"))
        .map(|endpoint| endpoint.trim().to_string())
        .unwrap_or_default();
    PageConfig {
        contact_endpoint,
        ..PageConfig::default()
    }
}

pub(crate) fn set_page_config(config: PageConfig) {
    PAGE_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

pub(crate) fn page_config() -> PageConfig {
    PAGE_CONFIG
        .with(|slot| slot.borrow().clone())
        .unwrap_or_else(load_page_config)
}
