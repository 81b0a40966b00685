pub const NAVBAR_SOLID_OFFSET: f64 = 10.0;
pub const NAVBAR_HIDE_OFFSET: f64 = 100.0;
pub const SECTION_LOOKAHEAD: f64 = 200.0;
pub const PARALLAX_RATE: f64 = -0.3;
/// Height of the fixed navbar, subtracted from anchor targets.
pub const NAV_SCROLL_OFFSET: f64 = 52.0;

const NAVBAR_BACKDROP: &str = "saturate(180%) blur(20px)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarAppearance {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
    pub border_bottom: &'static str,
}

pub fn navbar_appearance(scroll_y: f64) -> NavbarAppearance {
    if scroll_y > NAVBAR_SOLID_OFFSET {
        NavbarAppearance {
            background: "rgba(255, 255, 255, 0.95)",
            backdrop_filter: NAVBAR_BACKDROP,
            border_bottom: "1px solid rgba(0, 0, 0, 0.1)",
        }
    } else {
        NavbarAppearance {
            background: "rgba(255, 255, 255, 0.8)",
            backdrop_filter: NAVBAR_BACKDROP,
            border_bottom: "1px solid rgba(0, 0, 0, 0.05)",
        }
    }
}

pub fn navbar_hidden(previous_y: f64, current_y: f64) -> bool {
    current_y > previous_y && current_y > NAVBAR_HIDE_OFFSET
}

pub fn navbar_transform(hidden: bool) -> &'static str {
    if hidden {
        "translateY(-100%)"
    } else {
        "translateY(0)"
    }
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_RATE)
}

/// Picks the last section, in document order, whose top minus the look-ahead
/// is at or above `scroll_y`. A qualifying section without an id clears the
/// selection, the same as no section qualifying.
pub fn active_section<'a, I>(sections: I, scroll_y: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (Option<&'a str>, f64)>,
{
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - SECTION_LOOKAHEAD {
            current = id.filter(|id| !id.is_empty());
        }
    }
    current
}

pub fn nav_href_matches(href: Option<&str>, active: Option<&str>) -> bool {
    match (href, active) {
        (Some(href), Some(id)) => href.strip_prefix('#') == Some(id),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub appearance: NavbarAppearance,
    pub hidden: bool,
}

/// Scroll bookkeeping owned by the scroll effects controller.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    last_scroll_y: f64,
    active_section: Option<String>,
    frame_pending: bool,
}

impl ScrollState {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_scroll_y: initial_y,
            active_section: None,
            frame_pending: false,
        }
    }

    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    /// Runs on every scroll event, before any frame throttling.
    pub fn record(&mut self, current_y: f64) -> ScrollUpdate {
        let update = ScrollUpdate {
            appearance: navbar_appearance(current_y),
            hidden: navbar_hidden(self.last_scroll_y, current_y),
        };
        self.last_scroll_y = current_y;
        update
    }

    /// Returns `true` when the caller should schedule a frame; `false` while one is pending.
    pub fn request_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    pub fn frame_done(&mut self) {
        self.frame_pending = false;
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Returns `true` if the active section changed.
    pub fn set_active_section(&mut self, id: Option<&str>) -> bool {
        if self.active_section.as_deref() == id {
            return false;
        }
        self.active_section = id.map(str::to_string);
        true
    }
}
