use folio_core::effects::{floating_card_timing, Tilt};
use folio_core::scroll::{nav_href_matches, navbar_transform, parallax_transform};
use folio_core::{active_section, navbar_appearance, navbar_hidden, ScrollState};

fn sections() -> Vec<(Option<&'static str>, f64)> {
    vec![
        (Some("home"), 0.0),
        (Some("about"), 800.0),
        (Some("projects"), 1600.0),
    ]
}

#[test]
fn section_activates_exactly_at_lookahead() {
    assert_eq!(active_section(sections(), 600.0), Some("about"));
    assert_eq!(active_section(sections(), 599.0), Some("home"));
    assert_eq!(active_section(sections(), 1400.0), Some("projects"));
}

#[test]
fn no_qualifying_section_means_no_active_link() {
    let later = vec![(Some("about"), 800.0)];
    assert_eq!(active_section(later, 0.0), None);
    assert_eq!(active_section(Vec::new(), 500.0), None);
}

#[test]
fn section_without_id_clears_selection() {
    let list = vec![(Some("home"), 0.0), (None, 400.0)];
    assert_eq!(active_section(list, 300.0), None);
}

#[test]
fn href_matching_uses_fragment() {
    assert!(nav_href_matches(Some("#about"), Some("about")));
    assert!(!nav_href_matches(Some("about"), Some("about")));
    assert!(!nav_href_matches(Some("#about"), None));
    assert!(!nav_href_matches(None, Some("about")));
}

#[test]
fn navbar_turns_solid_after_ten_pixels() {
    assert_eq!(navbar_appearance(10.0).background, "rgba(255, 255, 255, 0.8)");
    assert_eq!(navbar_appearance(11.0).background, "rgba(255, 255, 255, 0.95)");
    assert_eq!(navbar_appearance(11.0).border_bottom, "1px solid rgba(0, 0, 0, 0.1)");
}

#[test]
fn navbar_hides_only_when_scrolling_down_past_threshold() {
    assert!(navbar_hidden(150.0, 200.0));
    assert!(!navbar_hidden(200.0, 150.0));
    assert!(!navbar_hidden(50.0, 100.0));
    assert!(!navbar_hidden(200.0, 200.0));
    assert_eq!(navbar_transform(true), "translateY(-100%)");
    assert_eq!(navbar_transform(false), "translateY(0)");
}

#[test]
fn state_tracks_previous_position() {
    let mut state = ScrollState::new(0.0);
    assert!(!state.record(90.0).hidden);
    assert!(state.record(150.0).hidden);
    assert!(!state.record(120.0).hidden);
    assert_eq!(state.last_scroll_y(), 120.0);
}

#[test]
fn frame_throttle_coalesces_until_done() {
    let mut state = ScrollState::new(0.0);
    assert!(state.request_frame());
    assert!(!state.request_frame());
    state.record(300.0);
    assert!(!state.request_frame());
    state.frame_done();
    assert!(state.request_frame());
}

#[test]
fn active_section_change_is_reported_once() {
    let mut state = ScrollState::new(0.0);
    assert!(state.set_active_section(Some("about")));
    assert!(!state.set_active_section(Some("about")));
    assert!(state.set_active_section(None));
    assert_eq!(state.active_section(), None);
}

#[test]
fn parallax_moves_against_scroll() {
    assert_eq!(parallax_transform(100.0), "translateY(-30px)");
}

#[test]
fn tilt_follows_pointer_offset() {
    let tilt = Tilt::from_pointer(0.0, 100.0, 200.0, 100.0);
    assert_eq!(tilt.rotate_x, 2.5);
    assert_eq!(tilt.rotate_y, 5.0);
    assert_eq!(
        tilt.transform(),
        "perspective(1000px) rotateX(2.5deg) rotateY(5deg) translateZ(10px)"
    );
}

#[test]
fn floating_cards_are_staggered() {
    assert_eq!(floating_card_timing(0), (0.0, 6.0));
    assert_eq!(floating_card_timing(3), (1.5, 7.5));
}
