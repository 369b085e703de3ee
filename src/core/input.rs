//! Movement flags and the pure event transition.
//!
//! Los callbacks del host no tocan el estado directamente: producen un
//! `InputEvent` y el nuevo estado sale de `apply_event`. Última escritura gana.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(MoveKey),
    KeyUp(MoveKey),
}

/// Cuatro banderas independientes, leídas una vez por tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

pub fn apply_event(mut state: InputState, event: InputEvent) -> InputState {
    let (key, pressed) = match event {
        InputEvent::KeyDown(k) => (k, true),
        InputEvent::KeyUp(k) => (k, false),
    };
    match key {
        MoveKey::Forward => state.forward = pressed,
        MoveKey::Backward => state.backward = pressed,
        MoveKey::Left => state.left = pressed,
        MoveKey::Right => state.right = pressed,
    }
    state
}
