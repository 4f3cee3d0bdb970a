// Gamepad polling via gilrs

use super::action::{Button, PlayerId};
use super::keystate::KeyStateTable;
use gilrs::{Axis, Button as PadButton, EventType, GamepadId, Gilrs};
use log::{debug, warn};

/// Stick deflection required to register a direction. Strictly greater
/// than the threshold triggers; exactly at the threshold does not.
pub const AXIS_THRESHOLD: f32 = 0.5;

/// Directional booleans derived from one stick snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AxisDirections {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Threshold a stick position into four directional booleans.
///
/// `y` uses the down-positive screen convention. Opposite directions are
/// mutually exclusive here by construction, but nothing downstream relies
/// on that.
pub fn directions_from_axes(x: f32, y: f32) -> AxisDirections {
    AxisDirections {
        left: x < -AXIS_THRESHOLD,
        right: x > AXIS_THRESHOLD,
        up: y < -AXIS_THRESHOLD,
        down: y > AXIS_THRESHOLD,
    }
}

/// Polls connected gamepads once per frame and writes their state into the
/// key table.
///
/// Gamepads have no change notification, so this is active polling: every
/// connected pad's id is treated as a player id and all five button states
/// are written each poll, overwriting whatever the keyboard set for that
/// player (last writer wins).
pub struct GamepadPoller {
    gilrs: Option<Gilrs>,
}

impl GamepadPoller {
    /// Create a poller. If the gamepad backend cannot be initialized the
    /// poller degrades to a no-op and the game stays keyboard-only.
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(g) => Some(g),
            Err(e) => {
                warn!("Failed to initialize gamepad support: {}", e);
                None
            }
        };
        Self { gilrs }
    }

    /// Drain pending connection events, then snapshot every connected pad
    /// into the key table.
    pub fn poll(&mut self, keys: &mut KeyStateTable) {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return;
        };

        while let Some(event) = gilrs.next_event() {
            match event.event {
                EventType::Connected => Self::on_connected(event.id),
                EventType::Disconnected => debug!("Gamepad {} disconnected", event.id),
                // Button/axis events are ignored; state is read by snapshot below
                _ => {}
            }
        }

        for (id, pad) in gilrs.gamepads() {
            let player: PlayerId = usize::from(id);
            let x = pad.value(Axis::LeftStickX);
            // gilrs sticks are up-positive; screen space is down-positive
            let y = -pad.value(Axis::LeftStickY);
            let dirs = directions_from_axes(x, y);

            keys.set(player, Button::Left, dirs.left);
            keys.set(player, Button::Right, dirs.right);
            keys.set(player, Button::Up, dirs.up);
            keys.set(player, Button::Down, dirs.down);
            keys.set(player, Button::Action, pad.is_pressed(PadButton::South));
        }
    }

    /// Connect handshake hook. Some platforms only report pad state after
    /// the connect notification has been observed; there is nothing else
    /// to negotiate.
    fn on_connected(id: GamepadId) {
        debug!("Gamepad {} connected", id);
    }
}

impl Default for GamepadPoller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_stick_triggers_nothing() {
        assert_eq!(directions_from_axes(0.0, 0.0), AxisDirections::default());
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly +/-0.5 must not trigger
        assert_eq!(directions_from_axes(0.5, 0.0), AxisDirections::default());
        assert_eq!(directions_from_axes(-0.5, 0.0), AxisDirections::default());
        assert_eq!(directions_from_axes(0.0, 0.5), AxisDirections::default());
        assert_eq!(directions_from_axes(0.0, -0.5), AxisDirections::default());
    }

    #[test]
    fn test_just_past_threshold_triggers() {
        assert!(directions_from_axes(0.51, 0.0).right);
        assert!(directions_from_axes(-0.51, 0.0).left);
        assert!(directions_from_axes(0.0, 0.51).down);
        assert!(directions_from_axes(0.0, -0.51).up);
    }

    #[test]
    fn test_full_deflection() {
        let dirs = directions_from_axes(1.0, -1.0);
        assert!(dirs.right);
        assert!(dirs.up);
        assert!(!dirs.left);
        assert!(!dirs.down);
    }

    #[test]
    fn test_diagonal_triggers_both_axes() {
        let dirs = directions_from_axes(-0.8, 0.8);
        assert!(dirs.left);
        assert!(dirs.down);
    }
}
