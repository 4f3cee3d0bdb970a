// Per-player logical-button state

use super::action::{Button, PlayerId};

/// Held/released state of every logical button for one player.
///
/// This is the read-only slice a player's update consumes; a button that
/// was never touched reads as released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    held: [bool; Button::COUNT],
}

impl ButtonStates {
    /// Whether a button is currently held.
    pub fn is_pressed(&self, button: Button) -> bool {
        self.held[button.index()]
    }

    fn set(&mut self, button: Button, pressed: bool) {
        self.held[button.index()] = pressed;
    }
}

/// Button states for every player, indexed by player id.
///
/// The table grows on demand: writes for ids beyond the spawned roster are
/// accepted (an extra gamepad may report under such an id) and simply have
/// no player reading them. Reads for unknown ids yield all-released state,
/// never an error.
#[derive(Debug, Default)]
pub struct KeyStateTable {
    players: Vec<ButtonStates>,
}

impl KeyStateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one button for one player. Idempotent; never fails.
    pub fn set(&mut self, player: PlayerId, button: Button, pressed: bool) {
        if player >= self.players.len() {
            self.players.resize(player + 1, ButtonStates::default());
        }
        self.players[player].set(button, pressed);
    }

    /// Snapshot of one player's button states (all released if untouched).
    pub fn player(&self, player: PlayerId) -> ButtonStates {
        self.players.get(player).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_buttons_read_released() {
        let table = KeyStateTable::new();
        for button in Button::ALL {
            assert!(!table.player(0).is_pressed(button));
            assert!(!table.player(7).is_pressed(button));
        }
    }

    #[test]
    fn test_set_and_read_back() {
        let mut table = KeyStateTable::new();
        table.set(0, Button::Left, true);
        assert!(table.player(0).is_pressed(Button::Left));
        assert!(!table.player(0).is_pressed(Button::Right));
        assert!(!table.player(1).is_pressed(Button::Left));
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut table = KeyStateTable::new();
        table.set(0, Button::Down, false);
        assert_eq!(table.player(0), ButtonStates::default());

        table.set(0, Button::Down, true);
        let once = table.player(0);
        table.set(0, Button::Down, true);
        assert_eq!(table.player(0), once);

        table.set(0, Button::Down, false);
        table.set(0, Button::Down, false);
        assert_eq!(table.player(0), ButtonStates::default());
    }

    #[test]
    fn test_players_are_independent() {
        let mut table = KeyStateTable::new();
        table.set(0, Button::Left, true);
        table.set(1, Button::Right, true);
        assert!(table.player(0).is_pressed(Button::Left));
        assert!(!table.player(0).is_pressed(Button::Right));
        assert!(table.player(1).is_pressed(Button::Right));
        assert!(!table.player(1).is_pressed(Button::Left));
    }

    #[test]
    fn test_grows_for_ids_beyond_roster() {
        let mut table = KeyStateTable::new();
        table.set(5, Button::Action, true);
        assert!(table.player(5).is_pressed(Button::Action));
        // Intermediate ids exist with released state
        assert!(!table.player(3).is_pressed(Button::Action));
    }
}
