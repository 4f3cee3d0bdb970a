// Game state: the two-player roster and per-frame orchestration

use super::player::Player;
use crate::engine::input::{BindingTable, Button, KeyStateTable, PlayerId};
use crate::engine::render::RenderSurface;
use glam::Vec2;
use winit::keyboard::KeyCode;

/// Number of players in the fixed roster.
pub const ROSTER_SIZE: usize = 2;

/// Spawn points and speed factors for the roster, by player id.
const SPAWNS: [(Vec2, f32); ROSTER_SIZE] = [
    (Vec2::new(96.0, 96.0), 0.5),
    (Vec2::new(224.0, 96.0), 0.25),
];

/// Owns the roster and the key-state table; runs one update and one draw
/// per frame.
#[derive(Debug)]
pub struct GameState {
    players: Vec<Player>,
    keys: KeyStateTable,
}

impl GameState {
    /// Create the fixed two-player roster with an empty key table.
    pub fn new() -> Self {
        let players = SPAWNS
            .iter()
            .enumerate()
            .map(|(id, &(spawn, speed_factor))| Player::new(id, spawn, speed_factor))
            .collect();
        Self {
            players,
            keys: KeyStateTable::new(),
        }
    }

    /// Set one logical-button entry. Idempotent and infallible: player ids
    /// beyond the roster are accepted (an extra gamepad may report under
    /// one) and simply have no sprite reading them.
    pub fn toggle_key(&mut self, player: PlayerId, button: Button, pressed: bool) {
        self.keys.set(player, button, pressed);
    }

    /// Route a physical key event through the binding table. Unbound keys
    /// are silently ignored.
    pub fn process_key(&mut self, bindings: &BindingTable, key: KeyCode, pressed: bool) {
        if let Some((player, button)) = bindings.lookup(key) {
            self.toggle_key(player, button, pressed);
        }
    }

    /// Advance every player by the elapsed time, each reading only its own
    /// key-state slice, in roster order.
    pub fn update(&mut self, delta_ms: f32) {
        for player in &mut self.players {
            let keys = self.keys.player(player.id);
            player.update(delta_ms, keys);
        }
    }

    /// Clear the surface, then draw the roster in ascending order — later
    /// players overlap earlier ones where sprites collide.
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.clear();
        for player in &self.players {
            player.draw(surface);
        }
    }

    /// The roster, in draw order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Mutable access to the key table, for the gamepad poller.
    pub fn keys_mut(&mut self) -> &mut KeyStateTable {
        &mut self.keys
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::render::{DrawCommand, RecordingSurface};

    #[test]
    fn test_roster_is_two_players_with_stable_ids() {
        let state = GameState::new();
        assert_eq!(state.players().len(), ROSTER_SIZE);
        assert_eq!(state.players()[0].id, 0);
        assert_eq!(state.players()[1].id, 1);
    }

    #[test]
    fn test_process_key_bound() {
        let bindings = BindingTable::default_layout().unwrap();
        let mut state = GameState::new();

        state.process_key(&bindings, KeyCode::ArrowLeft, true);
        state.update(16.0);
        assert_eq!(state.players()[0].pos.x, 96.0 - 8.0);
        // Player 1 untouched
        assert_eq!(state.players()[1].pos.x, 224.0);
    }

    #[test]
    fn test_process_key_unbound_is_ignored() {
        let bindings = BindingTable::default_layout().unwrap();
        let mut state = GameState::new();

        state.process_key(&bindings, KeyCode::KeyZ, true);
        state.update(16.0);
        assert_eq!(state.players()[0].pos, Vec2::new(96.0, 96.0));
        assert_eq!(state.players()[1].pos, Vec2::new(224.0, 96.0));
    }

    #[test]
    fn test_second_player_layout_drives_second_player() {
        let bindings = BindingTable::default_layout().unwrap();
        let mut state = GameState::new();

        state.process_key(&bindings, KeyCode::KeyD, true);
        state.update(16.0);
        // factor 0.25: step = trunc(16 * 0.25) = 4
        assert_eq!(state.players()[1].pos.x, 224.0 + 4.0);
        assert_eq!(state.players()[0].pos.x, 96.0);
    }

    #[test]
    fn test_key_release_stops_movement() {
        let bindings = BindingTable::default_layout().unwrap();
        let mut state = GameState::new();

        state.process_key(&bindings, KeyCode::ArrowRight, true);
        state.update(16.0);
        state.process_key(&bindings, KeyCode::ArrowRight, false);
        state.update(16.0);
        assert_eq!(state.players()[0].pos.x, 96.0 + 8.0);
    }

    #[test]
    fn test_toggle_key_beyond_roster_is_harmless() {
        let mut state = GameState::new();
        state.toggle_key(9, Button::Left, true);
        state.update(16.0);

        let mut surface = RecordingSurface::new();
        state.draw(&mut surface);
        // Still one clear plus exactly two sprites
        assert_eq!(surface.commands.len(), 1 + ROSTER_SIZE);
        assert_eq!(state.players()[0].pos, Vec2::new(96.0, 96.0));
    }

    #[test]
    fn test_draw_clears_once_then_ascending_roster_order() {
        let state = GameState::new();
        let mut surface = RecordingSurface::new();
        state.draw(&mut surface);

        assert_eq!(surface.commands[0], DrawCommand::Clear);
        let sprites: Vec<_> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::PutSprite { character, .. } => Some(*character),
                DrawCommand::Clear => None,
            })
            .collect();
        assert_eq!(sprites, vec![0, 1]);
        assert_eq!(
            surface
                .commands
                .iter()
                .filter(|c| **c == DrawCommand::Clear)
                .count(),
            1
        );
    }

    #[test]
    fn test_players_update_independently() {
        let mut state = GameState::new();
        state.toggle_key(0, Button::Down, true);
        state.toggle_key(1, Button::Up, true);
        state.update(16.0);

        assert_eq!(state.players()[0].pos.y, 96.0 + 8.0);
        assert_eq!(state.players()[1].pos.y, 96.0 - 4.0);
    }
}
