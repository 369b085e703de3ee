//! Player state and collider derivation.

use super::math::{Aabb, Vec3};

// Caja de 1 x 1.8 x 1 centrada en la cámara.
pub const PLAYER_SIZE: Vec3 = Vec3::new(1.0, 1.8, 1.0);

pub struct Player {
    pub pos: Vec3, // posición de la cámara (altura de ojos en y)
    pub vel: Vec3, // amortiguada cada tick
}

impl Player {
    pub fn new(pos: Vec3) -> Self {
        Self { pos, vel: Vec3::ZERO }
    }

    /// Caja de colisión centrada en una posición (actual o candidata).
    #[inline]
    pub fn collider_at(pos: Vec3) -> Aabb {
        Aabb::from_center_size(pos, PLAYER_SIZE)
    }
}
