//! Simulation state and the per-frame tick.
//!
//! Todo el estado vive aquí y lo toca solo el bucle principal: sin globals,
//! el tick se prueba sin ventana.

use super::input::{apply_event, InputEvent, InputState};
use super::math::Vec3;
use super::movement::resolve_movement;
use super::player::Player;
use super::projectile::{self, Projectile};
use super::world::{build_map, Wall};

pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 1.8, 5.0);

pub struct SimState {
    pub player: Player,
    pub walls: Vec<Wall>,
    pub projectiles: Vec<Projectile>,
    pub input: InputState,
}

impl SimState {
    pub fn new() -> Self {
        Self {
            player: Player::new(PLAYER_SPAWN),
            walls: build_map(),
            projectiles: Vec::new(),
            input: InputState::default(),
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        self.input = apply_event(self.input, event);
    }

    /// Dispara desde la posición actual con el rumbo completo de la cámara
    /// (incluye la inclinación vertical). Solo con la captura activa.
    pub fn fire(&mut self, facing: Vec3, capture_active: bool) {
        if !capture_active {
            return;
        }
        projectile::spawn(&mut self.projectiles, self.player.pos, facing.normalized());
    }

    /// Un tick: resolver movimiento (solo con captura activa) y avanzar
    /// balas (siempre: las balas en vuelo no se congelan al soltar el puntero).
    pub fn tick(&mut self, facing: Vec3, capture_active: bool) {
        if capture_active {
            resolve_movement(&mut self.player, &self.input, facing, &self.walls);
        }
        projectile::update(&mut self.projectiles);
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}
