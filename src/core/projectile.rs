//! Projectile spawn, advance and pruning.

use super::math::Vec3;

pub const PROJECTILE_SPEED: f32 = 3.0;
pub const PROJECTILE_RANGE: f32 = 100.0;

/// Bala: posición y rumbo unitario fijados al disparar.
pub struct Projectile {
    pub pos: Vec3,
    pub dir: Vec3,
}

pub fn spawn(projectiles: &mut Vec<Projectile>, origin: Vec3, dir: Vec3) {
    projectiles.push(Projectile { pos: origin, dir });
}

/// Avanza todas las balas y elimina las que pasan el rango, en una sola
/// pasada in-place que no se salta elementos.
pub fn update(projectiles: &mut Vec<Projectile>) {
    projectiles.retain_mut(|p| {
        p.pos += p.dir * PROJECTILE_SPEED;
        p.pos.length() <= PROJECTILE_RANGE
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_keeps_origin_and_heading() {
        let mut live = Vec::new();
        spawn(&mut live, Vec3::new(0.0, 1.8, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].pos, Vec3::new(0.0, 1.8, 5.0));
        assert_eq!(live[0].dir, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn removed_exactly_when_range_is_exceeded() {
        // Desde el origen a velocidad 3.0: |pos| = 99 en el tick 33 (sigue
        // viva), 102 en el tick 34 (eliminada).
        let mut live = Vec::new();
        spawn(&mut live, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        for _ in 0..33 {
            update(&mut live);
        }
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].pos.z, -99.0);
        update(&mut live);
        assert!(live.is_empty());
    }

    #[test]
    fn pruning_does_not_skip_survivors() {
        // mezcla de balas por expirar y recién disparadas
        let mut live = Vec::new();
        spawn(&mut live, Vec3::new(0.0, 0.0, -99.0), Vec3::new(0.0, 0.0, -1.0));
        spawn(&mut live, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        spawn(&mut live, Vec3::new(0.0, 0.0, 99.0), Vec3::new(0.0, 0.0, 1.0));
        spawn(&mut live, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        update(&mut live);
        assert_eq!(live.len(), 2);
        assert_eq!(live[0].pos, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(live[1].pos, Vec3::new(0.0, 0.0, -3.0));
    }
}
