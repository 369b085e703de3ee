//! Movement & collision resolver.
//!
//! Acepta o rechaza el desplazamiento completo del tick contra todas las
//! paredes. Sin deslizamiento por eje: chocar en diagonal frena en seco.

use super::input::InputState;
use super::math::Vec3;
use super::player::Player;
use super::world::Wall;

pub const ACCELERATION: f32 = 0.03;
pub const DAMPING: f32 = 0.9;

/// Dirección deseada en el plano horizontal a partir de las banderas.
/// Banderas opuestas se cancelan; el vector cero se queda en cero.
pub fn desired_direction(input: &InputState, facing: Vec3) -> Vec3 {
    // Mirar arriba/abajo no cambia la velocidad de caminar.
    let forward = Vec3::new(facing.x, 0.0, facing.z).normalized();
    let right = forward.cross(Vec3::UP).normalized();

    let mut dir = Vec3::ZERO;
    if input.forward {
        dir += forward;
    }
    if input.backward {
        dir -= forward;
    }
    if input.left {
        dir -= right;
    }
    if input.right {
        dir += right;
    }
    dir.normalized()
}

/// Un paso de simulación: acumula velocidad, prueba la posición candidata
/// contra todas las paredes y la confirma solo si no hay intersección.
/// El frenado se aplica siempre, choque o no.
pub fn resolve_movement(player: &mut Player, input: &InputState, facing: Vec3, walls: &[Wall]) {
    let dir = desired_direction(input, facing);

    // La velocidad se acumula con signo opuesto al desplazamiento.
    player.vel.x -= dir.x * ACCELERATION;
    player.vel.z -= dir.z * ACCELERATION;

    let candidate = player.pos + Vec3::new(-player.vel.x, 0.0, -player.vel.z);
    let candidate_box = Player::collider_at(candidate);

    // Escaneo lineal con corte en el primer choque.
    let blocked = walls.iter().any(|w| candidate_box.intersects(&w.aabb));
    if !blocked {
        player.pos = candidate;
    }

    player.vel.x *= DAMPING;
    player.vel.z *= DAMPING;
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::world::make_wall;
    use approx::assert_relative_eq;

    const LOOK_INTO_MAZE: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    fn held_forward() -> InputState {
        InputState { forward: true, ..InputState::default() }
    }

    #[test]
    fn clear_candidate_commits_exactly() {
        let mut p = Player::new(Vec3::new(0.0, 1.8, 5.0));
        resolve_movement(&mut p, &held_forward(), LOOK_INTO_MAZE, &[]);
        // dir.z = -1 deja velocity.z en +0.03; con el signo invertido el
        // candidato queda exactamente en pos + (0, 0, -0.03).
        assert_eq!(p.pos, Vec3::new(0.0, 1.8, 5.0 - 0.03));
        assert_eq!(p.vel.z, 0.03 * DAMPING);
    }

    #[test]
    fn blocked_candidate_leaves_position_unchanged() {
        let start = Vec3::new(0.0, 1.8, -78.0);
        let mut p = Player::new(start);
        p.vel.z = 1.2; // candidato en z = -79.2, su caja alcanza la pared
        let walls = [make_wall(0.0, 2.5, -80.0, 60.0, 1.0)];
        resolve_movement(&mut p, &InputState::default(), LOOK_INTO_MAZE, &walls);
        assert_eq!(p.pos, start);
        // el frenado se aplica igual tras el rechazo
        assert_eq!(p.vel.z, 1.2 * DAMPING);
    }

    #[test]
    fn idle_velocity_decays_geometrically() {
        let mut p = Player::new(Vec3::ZERO);
        p.vel = Vec3::new(0.5, 0.0, 0.3);
        resolve_movement(&mut p, &InputState::default(), LOOK_INTO_MAZE, &[]);
        assert_eq!(p.vel, Vec3::new(0.5 * DAMPING, 0.0, 0.3 * DAMPING));

        // la magnitud decrece estrictamente mientras no sea cero
        let mut mag = p.vel.length();
        for _ in 0..50 {
            resolve_movement(&mut p, &InputState::default(), LOOK_INTO_MAZE, &[]);
            let next = p.vel.length();
            assert!(next < mag && next > 0.0);
            mag = next;
        }
    }

    #[test]
    fn opposing_flags_cancel_to_zero() {
        let input = InputState { left: true, right: true, ..InputState::default() };
        assert_eq!(desired_direction(&input, LOOK_INTO_MAZE), Vec3::ZERO);
    }

    #[test]
    fn diagonal_direction_is_normalized() {
        let input = InputState { forward: true, right: true, ..InputState::default() };
        let dir = desired_direction(&input, LOOK_INTO_MAZE);
        assert_relative_eq!(dir.length(), 1.0, max_relative = 1e-6);
    }

    #[test]
    fn pitched_facing_does_not_slow_walking() {
        // mirando 45° hacia arriba la dirección horizontal sigue siendo unitaria
        let facing = Vec3::new(0.0, 0.7071, -0.7071);
        let dir = desired_direction(&held_forward(), facing);
        assert_relative_eq!(dir.length(), 1.0, max_relative = 1e-6);
        assert_eq!(dir.y, 0.0);
    }
}
