use fighter_fury::compute::{init_state, start_game};
use fighter_fury::entities::GameStatus;
use fighter_fury::input::*;
use fighter_fury::{GameState, Settings};

fn idle() -> GameState {
    init_state(Settings::default())
}

fn active() -> GameState {
    start_game(&idle())
}

fn expect_continue(flow: Flow) -> GameState {
    match flow {
        Flow::Continue(state) => state,
        Flow::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn quit_events_end_the_loop() {
    assert!(matches!(handle_event(&active(), InputEvent::Quit), Flow::Quit));
    assert!(matches!(
        handle_event(&idle(), InputEvent::KeyDown(Key::Quit)),
        Flow::Quit
    ));
}

#[test]
fn movement_keys_set_and_clear_intent() {
    let s = expect_continue(handle_event(&active(), InputEvent::KeyDown(Key::MoveNear)));
    assert!(s.player.moving_toward_near_edge);
    assert!(!s.player.moving_toward_far_edge);

    let s = expect_continue(handle_event(&s, InputEvent::KeyDown(Key::MoveFar)));
    assert!(s.player.moving_toward_near_edge);
    assert!(s.player.moving_toward_far_edge);

    let s = expect_continue(handle_event(&s, InputEvent::KeyUp(Key::MoveNear)));
    assert!(!s.player.moving_toward_near_edge);
    assert!(s.player.moving_toward_far_edge);
}

#[test]
fn fire_on_press_only() {
    let s = expect_continue(handle_event(&active(), InputEvent::KeyDown(Key::Fire)));
    assert_eq!(s.bullets.len(), 1);
    let s = expect_continue(handle_event(&s, InputEvent::KeyUp(Key::Fire)));
    assert_eq!(s.bullets.len(), 1);
}

#[test]
fn start_key_starts_from_title_screen() {
    let s = expect_continue(handle_event(&idle(), InputEvent::KeyDown(Key::Start)));
    assert_eq!(s.status, GameStatus::Active);
}

#[test]
fn pointer_click_on_button_starts() {
    let s = expect_continue(handle_event(&idle(), InputEvent::PointerClick { x: 550, y: 390 }));
    assert_eq!(s.status, GameStatus::Active);
}

#[test]
fn pointer_click_off_button_ignored() {
    let s = expect_continue(handle_event(&idle(), InputEvent::PointerClick { x: 499, y: 390 }));
    assert_eq!(s.status, GameStatus::Inactive);
}
