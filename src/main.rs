// main.rs

mod audio_manager;
mod camera;
mod core;
mod process_events;
mod render;

use log::{info, warn};
use raylib::prelude::*;

use crate::audio_manager::AudioManager;
use crate::camera::{make_camera, update_camera, LookController, Viewport};
use crate::core::sim::SimState;
use crate::process_events::process_events;

fn main() {
    env_logger::init();

    let window_width = 1024;
    let window_height = 768;

    let (mut window, raylib_thread) = raylib::init()
        .size(window_width, window_height)
        .title("Maze Shooter")
        .resizable()
        .build();

    // ESC no cierra la ventana: suelta la captura del puntero.
    window.set_exit_key(None);
    window.set_target_fps(60);

    let audio = match AudioManager::new() {
        Ok(mut a) => {
            a.load_sfx_auto();
            Some(a)
        }
        Err(e) => {
            warn!("audio deshabilitado: {e}");
            None
        }
    };

    let mut state = SimState::new();
    let mut look = LookController::new();
    let mut viewport = Viewport::new(window.get_screen_width(), window.get_screen_height());
    let mut camera3d = make_camera(state.player.pos, &look);

    info!(
        "listo: {} paredes, spawn en {:?}",
        state.walls.len(),
        state.player.pos
    );

    while !window.window_should_close() {
        // entrada → movimiento → balas → render
        process_events(&mut window, &mut state, &mut look, &mut viewport, audio.as_ref());

        let captured = window.is_cursor_hidden();
        state.tick(look.forward(), captured);
        update_camera(&mut camera3d, state.player.pos, &look);

        render::draw_frame(&mut window, &raylib_thread, &camera3d, &state, &viewport);
    }
}
