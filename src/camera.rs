//! First-person look controller, viewport record and camera sync.

use raylib::prelude::*;

use crate::core::math::Vec3;

pub const FOV_Y_DEG: f32 = 75.0;
// Justo antes de ±90° para que el rumbo nunca degenere en los polos.
pub const PITCH_LIMIT: f32 = 1.55;

/// Yaw/pitch acumulados del mouse. Yaw 0 mira hacia -Z (el spawn mira al
/// laberinto).
pub struct LookController {
    pub yaw: f32,
    pub pitch: f32,
    pub mouse_sens: f32,
}

impl LookController {
    pub fn new() -> Self {
        Self { yaw: 0.0, pitch: 0.0, mouse_sens: 0.0025 }
    }

    pub fn update(&mut self, delta: Vector2) {
        self.yaw -= delta.x * self.mouse_sens;
        self.pitch = (self.pitch - delta.y * self.mouse_sens).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Rumbo unitario completo de la cámara (con inclinación vertical).
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }
}

/// Registro de la proyección: tamaño del framebuffer y aspect exacto,
/// recalculado en cada resize.
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub aspect: f32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        let mut v = Self { width: 0, height: 0, aspect: 0.0 };
        v.resize(width, height);
        v
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.aspect = width as f32 / height as f32;
    }
}

#[inline]
pub fn to_rl(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

/// Sincroniza la cámara de raylib con la posición del jugador y el rumbo.
pub fn update_camera(camera: &mut Camera3D, player_pos: Vec3, look: &LookController) {
    camera.position = to_rl(player_pos);
    camera.target = to_rl(player_pos + look.forward());
}

pub fn make_camera(player_pos: Vec3, look: &LookController) -> Camera3D {
    Camera3D::perspective(
        to_rl(player_pos),
        to_rl(player_pos + look.forward()),
        Vector3::new(0.0, 1.0, 0.0),
        FOV_Y_DEG,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn aspect_equals_width_over_height_exactly() {
        let mut v = Viewport::new(1024, 768);
        assert_eq!(v.aspect, 1024.0 / 768.0);
        v.resize(1920, 1080);
        assert_eq!(v.aspect, 1920.0 / 1080.0);
    }

    #[test]
    fn resting_look_faces_negative_z() {
        let look = LookController::new();
        let f = look.forward();
        assert_eq!(f.y, 0.0);
        assert_relative_eq!(f.z, -1.0, max_relative = 1e-6);
    }

    #[test]
    fn forward_is_always_unit_length() {
        let mut look = LookController::new();
        look.update(Vector2::new(350.0, -120.0));
        assert_relative_eq!(look.forward().length(), 1.0, max_relative = 1e-6);
    }

    #[test]
    fn pitch_is_clamped_at_the_poles() {
        let mut look = LookController::new();
        look.update(Vector2::new(0.0, -1.0e6));
        assert_eq!(look.pitch, PITCH_LIMIT);
        look.update(Vector2::new(0.0, 1.0e6));
        assert_eq!(look.pitch, -PITCH_LIMIT);
    }
}
