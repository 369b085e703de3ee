//! Input handling: raylib polling translated into core events once per frame.

use log::{debug, info};
use raylib::prelude::*;

use crate::audio_manager::AudioManager;
use crate::camera::{LookController, Viewport};
use crate::core::input::{InputEvent, MoveKey};
use crate::core::sim::SimState;

// Cada dirección con su tecla de letra y su alias de flecha.
const KEY_BINDINGS: [(KeyboardKey, MoveKey); 8] = [
    (KeyboardKey::KEY_W, MoveKey::Forward),
    (KeyboardKey::KEY_UP, MoveKey::Forward),
    (KeyboardKey::KEY_S, MoveKey::Backward),
    (KeyboardKey::KEY_DOWN, MoveKey::Backward),
    (KeyboardKey::KEY_A, MoveKey::Left),
    (KeyboardKey::KEY_LEFT, MoveKey::Left),
    (KeyboardKey::KEY_D, MoveKey::Right),
    (KeyboardKey::KEY_RIGHT, MoveKey::Right),
];

/// Proceso de entrada del frame: teclado → banderas, mouse look, captura
/// del puntero, disparo y resize.
pub fn process_events(
    window: &mut RaylibHandle,
    state: &mut SimState,
    look: &mut LookController,
    viewport: &mut Viewport,
    audio: Option<&AudioManager>,
) {
    let captured = window.is_cursor_hidden();

    // Solo transiciones: mantener presionado no re-emite eventos.
    for (key, movement) in KEY_BINDINGS {
        if window.is_key_pressed(key) {
            state.handle_input(InputEvent::KeyDown(movement));
        }
        if window.is_key_released(key) {
            state.handle_input(InputEvent::KeyUp(movement));
        }
    }

    if captured {
        look.update(window.get_mouse_delta());
    }

    // Click: engancha la captura, o dispara si ya estaba enganchada.
    if window.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        if captured {
            state.fire(look.forward(), true);
            if let Some(audio) = audio {
                audio.play_shot();
            }
        } else {
            window.disable_cursor();
            info!("Pointer locked!");
        }
    }

    // ESC suelta la captura (la tecla de salida está deshabilitada en main).
    if captured && window.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
        window.enable_cursor();
        info!("Pointer unlocked!");
    }

    if window.is_window_resized() {
        viewport.resize(window.get_screen_width(), window.get_screen_height());
        debug!(
            "resize {}x{} (aspect {:.3})",
            viewport.width, viewport.height, viewport.aspect
        );
    }
}
