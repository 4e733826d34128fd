/// Platform-neutral input events and how they drive the round controller.
///
/// The front end translates whatever its device layer produces into
/// `InputEvent`s; everything after that is pure.

use crate::compute::{click, player_shoot, set_player_intent, start_game, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Toward the low-coordinate end of the advance axis (left or up).
    MoveNear,
    /// Toward the high-coordinate end of the advance axis (right or down).
    MoveFar,
    Fire,
    Start,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer press in playfield pixels.
    PointerClick { x: i32, y: i32 },
}

pub enum Flow {
    Continue(GameState),
    Quit,
}

pub fn handle_event(state: &GameState, event: InputEvent) -> Flow {
    let next = match event {
        InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => return Flow::Quit,
        InputEvent::KeyDown(Key::MoveNear) => set_player_intent(state, Some(true), None),
        InputEvent::KeyUp(Key::MoveNear) => set_player_intent(state, Some(false), None),
        InputEvent::KeyDown(Key::MoveFar) => set_player_intent(state, None, Some(true)),
        InputEvent::KeyUp(Key::MoveFar) => set_player_intent(state, None, Some(false)),
        // Fire is edge-triggered on press only
        InputEvent::KeyDown(Key::Fire) => player_shoot(state),
        InputEvent::KeyDown(Key::Start) => start_game(state),
        InputEvent::PointerClick { x, y } => click(state, x, y),
        InputEvent::KeyUp(_) => state.clone(),
    };
    Flow::Continue(next)
}
