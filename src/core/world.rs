//! Static map: the hard-coded wall layout and its collision volumes.

use super::math::{Aabb, Vec3};

pub const WALL_HEIGHT: f32 = 5.0;
pub const WALL_THICKNESS: f32 = 1.0;
pub const FLOOR_SIZE: f32 = 200.0;

/// Pared estática: centro y extensión para dibujar, caja para colisión.
pub struct Wall {
    pub center: Vec3,
    pub size: Vec3,
    pub aabb: Aabb,
}

// Coordenadas de paredes del laberinto (x, y, z, width, depth)
const MAZE_WALLS: [(f32, f32, f32, f32, f32); 14] = [
    (0.0, WALL_HEIGHT / 2.0, -95.0, 200.0, WALL_THICKNESS), // pared trasera
    (0.0, WALL_HEIGHT / 2.0, 95.0, 200.0, WALL_THICKNESS),  // pared frontal
    (-95.0, WALL_HEIGHT / 2.0, 0.0, WALL_THICKNESS, 200.0), // pared izquierda
    (95.0, WALL_HEIGHT / 2.0, 0.0, WALL_THICKNESS, 200.0),  // pared derecha
    // Paredes internas del laberinto
    (0.0, WALL_HEIGHT / 2.0, -80.0, 60.0, WALL_THICKNESS),
    (40.0, WALL_HEIGHT / 2.0, -60.0, 80.0, WALL_THICKNESS),
    (-50.0, WALL_HEIGHT / 2.0, -40.0, WALL_THICKNESS, 60.0),
    (20.0, WALL_HEIGHT / 2.0, -20.0, 100.0, WALL_THICKNESS),
    (-70.0, WALL_HEIGHT / 2.0, 0.0, WALL_THICKNESS, 80.0),
    (50.0, WALL_HEIGHT / 2.0, 20.0, 120.0, WALL_THICKNESS),
    (-30.0, WALL_HEIGHT / 2.0, 40.0, 80.0, WALL_THICKNESS),
    (10.0, WALL_HEIGHT / 2.0, 60.0, WALL_THICKNESS, 100.0),
    (-80.0, WALL_HEIGHT / 2.0, 80.0, WALL_THICKNESS, 60.0),
    (70.0, WALL_HEIGHT / 2.0, 90.0, 60.0, WALL_THICKNESS),
];

/// Una pared por entrada de la tabla; la altura es compartida.
pub fn make_wall(x: f32, y: f32, z: f32, width: f32, depth: f32) -> Wall {
    let center = Vec3::new(x, y, z);
    let size = Vec3::new(width, WALL_HEIGHT, depth);
    Wall { center, size, aabb: Aabb::from_center_size(center, size) }
}

/// Construye la lista de paredes en el orden de la tabla. Sin validación:
/// geometría rara produce colisiones raras, no errores.
pub fn build_map() -> Vec<Wall> {
    MAZE_WALLS
        .iter()
        .map(|&(x, y, z, w, d)| make_wall(x, y, z, w, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_has_one_wall_per_table_entry() {
        assert_eq!(build_map().len(), MAZE_WALLS.len());
    }

    #[test]
    fn back_wall_volume_matches_its_placement() {
        let walls = build_map();
        assert_eq!(walls[0].aabb.min, Vec3::new(-100.0, 0.0, -95.5));
        assert_eq!(walls[0].aabb.max, Vec3::new(100.0, 5.0, -94.5));
    }

    #[test]
    fn build_is_deterministic_and_order_preserving() {
        let a = build_map();
        let b = build_map();
        assert_eq!(a.len(), b.len());
        for (wa, wb) in a.iter().zip(b.iter()) {
            assert_eq!(wa.center, wb.center);
            assert_eq!(wa.size, wb.size);
            assert_eq!(wa.aabb, wb.aabb);
        }
    }
}
