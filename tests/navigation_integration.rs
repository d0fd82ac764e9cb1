//! End-to-end walks through the navigation state machine, message by
//! message, the way the runtime drives it.

use pretty_assertions::assert_eq;
use rstest::rstest;

use foliotui::{
    state::{AppState, Section},
    update::update,
    Msg,
};

fn run(msgs: impl IntoIterator<Item = Msg>) -> AppState {
    msgs.into_iter().fold(AppState::new(), |state, msg| {
        let (state, _) = update(msg, state);
        state
    })
}

#[test]
fn test_initial_state_is_home_with_menu_closed() {
    let state = AppState::new();
    assert_eq!(state.view.section, Section::Home);
    assert_eq!(state.view.menu_open, false);
}

#[rstest]
#[case(Section::Home)]
#[case(Section::Work)]
#[case(Section::About)]
#[case(Section::Contact)]
fn test_navigate_always_lands_on_target_with_menu_closed(#[case] section: Section) {
    // Regardless of the path taken beforehand
    let state = run([
        Msg::ToggleMenu,
        Msg::Navigate(Section::About),
        Msg::ToggleMenu,
        Msg::Navigate(section),
    ]);
    assert_eq!(state.view.section, section);
    assert_eq!(state.view.menu_open, false);
}

#[test]
fn test_menu_toggle_twice_round_trips() {
    let state = run([Msg::ToggleMenu, Msg::ToggleMenu]);
    assert_eq!(state.view.menu_open, false);

    let state = run([Msg::ToggleMenu, Msg::ToggleMenu, Msg::ToggleMenu]);
    assert_eq!(state.view.menu_open, true);
}

#[test]
fn test_close_menu_is_idempotent() {
    let once = run([Msg::ToggleMenu, Msg::CloseMenu]);
    let twice = run([Msg::ToggleMenu, Msg::CloseMenu, Msg::CloseMenu]);
    assert_eq!(once.view, twice.view);
    assert_eq!(once.view.menu_open, false);
}

#[test]
fn test_open_menu_then_navigate_scenario() {
    // toggleMenu -> open; navigateTo(work) -> work panel, menu closed
    let state = run([Msg::ToggleMenu]);
    assert_eq!(state.view.menu_open, true);

    let (state, _) = update(Msg::Navigate(Section::Work), state);
    assert_eq!(state.view.section, Section::Work);
    assert_eq!(state.view.menu_open, false);
}

#[test]
fn test_repeated_navigation_to_same_section_is_stable() {
    let once = run([Msg::Navigate(Section::About)]);
    let twice = run([Msg::Navigate(Section::About), Msg::Navigate(Section::About)]);
    assert_eq!(once.view, twice.view);
}

#[test]
fn test_scrolled_flag_derives_from_position() {
    let state = run([Msg::ScrollTo(0)]);
    assert_eq!(state.view.scroll.is_scrolled(), false);

    let state = run([Msg::ScrollTo(0), Msg::ScrollTo(120)]);
    assert_eq!(state.view.scroll.is_scrolled(), true);
}

#[test]
fn test_every_composite_state_is_reachable() {
    for section in [
        Section::Home,
        Section::Work,
        Section::About,
        Section::Contact,
    ] {
        let closed = run([Msg::Navigate(section)]);
        assert_eq!(
            (closed.view.section, closed.view.menu_open),
            (section, false)
        );

        let open = run([Msg::Navigate(section), Msg::ToggleMenu]);
        assert_eq!((open.view.section, open.view.menu_open), (section, true));
    }
}

#[test]
fn test_rapid_toggle_sequence_is_last_write_wins() {
    let state = run(std::iter::repeat(Msg::ToggleMenu).take(7));
    assert_eq!(state.view.menu_open, true);

    let state = run(std::iter::repeat(Msg::ToggleMenu).take(8));
    assert_eq!(state.view.menu_open, false);
}

#[test]
fn test_session_walk_through() {
    // A visitor browses the whole page: opens the menu, jumps to work,
    // scrolls the grid, reads about, and lands on contact.
    let mut state = AppState::new();
    for msg in [
        Msg::ToggleMenu,
        Msg::Navigate(Section::Work),
        Msg::ScrollDown,
        Msg::ScrollDown,
        Msg::ScrollDown,
        Msg::Navigate(Section::About),
        Msg::ScrollDown,
        Msg::Navigate(Section::Contact),
    ] {
        let (next, _) = update(msg, state);
        state = next;
    }
    assert_eq!(state.view.section, Section::Contact);
    assert_eq!(state.view.menu_open, false);
    // Scroll was reset by the last navigation
    assert_eq!(state.view.scroll.offset(), 0);
    assert!(!state.system.should_quit);
}
