//! Frame drawing: world, projectiles and HUD.

use raylib::prelude::*;

use crate::camera::{to_rl, Viewport};
use crate::core::sim::SimState;
use crate::core::world::FLOOR_SIZE;

const SKY: Color = Color::new(135, 206, 235, 255); // azul cielo
const FLOOR: Color = Color::LIGHTGRAY;
const WALL: Color = Color::BEIGE;
const WALL_EDGE: Color = Color::DARKBROWN;
const BULLET: Color = Color::RED;
const BULLET_RADIUS: f32 = 0.1;

/// Dibuja el frame completo. Precapturamos todo lo que use `window`
/// **antes** de mutarlo con begin_drawing.
pub fn draw_frame(
    window: &mut RaylibHandle,
    thread: &RaylibThread,
    camera: &Camera3D,
    state: &SimState,
    viewport: &Viewport,
) {
    let fps_now = window.get_fps();
    let captured = window.is_cursor_hidden();

    let mut d = window.begin_drawing(thread);
    d.clear_background(SKY);

    {
        let mut d3 = d.begin_mode3D(*camera);

        d3.draw_plane(Vector3::zero(), Vector2::new(FLOOR_SIZE, FLOOR_SIZE), FLOOR);
        d3.draw_grid(40, 5.0);

        for wall in &state.walls {
            let center = to_rl(wall.center);
            d3.draw_cube(center, wall.size.x, wall.size.y, wall.size.z, WALL);
            d3.draw_cube_wires(center, wall.size.x, wall.size.y, wall.size.z, WALL_EDGE);
        }

        for bullet in &state.projectiles {
            d3.draw_sphere(to_rl(bullet.pos), BULLET_RADIUS, BULLET);
        }
    }

    d.draw_text(&format!("FPS: {}", fps_now), 10, 10, 20, Color::WHITE);

    if captured {
        // mira en el centro del viewport
        let cx = viewport.width / 2;
        let cy = viewport.height / 2;
        d.draw_rectangle(cx - 6, cy - 1, 12, 2, Color::WHITE);
        d.draw_rectangle(cx - 1, cy - 6, 2, 12, Color::WHITE);
    } else {
        d.draw_text(
            "Click para capturar el mouse (ESC lo suelta)",
            10,
            40,
            20,
            Color::YELLOW,
        );
    }
}
