// Logical button definitions and default keyboard layouts

use winit::keyboard::KeyCode;

/// Index of a player in the roster (0-based).
pub type PlayerId = usize;

/// The closed set of logical buttons a player can hold.
///
/// Physical identity (which key or axis produced it) is stripped before
/// anything downstream sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    /// Reserved action button; currently has no effect on movement.
    Action,
}

impl Button {
    /// Number of logical buttons.
    pub const COUNT: usize = 5;

    /// All buttons, in stable order.
    pub const ALL: [Button; Button::COUNT] = [
        Button::Left,
        Button::Right,
        Button::Up,
        Button::Down,
        Button::Action,
    ];

    /// Stable integer identity, used for array-backed state storage.
    pub fn index(self) -> usize {
        match self {
            Button::Left => 0,
            Button::Right => 1,
            Button::Up => 2,
            Button::Down => 3,
            Button::Action => 4,
        }
    }
}

/// Default layout for player 0: arrow keys + space.
pub fn player0_layout() -> Vec<(KeyCode, Button)> {
    vec![
        (KeyCode::ArrowLeft, Button::Left),
        (KeyCode::ArrowRight, Button::Right),
        (KeyCode::ArrowUp, Button::Up),
        (KeyCode::ArrowDown, Button::Down),
        (KeyCode::Space, Button::Action),
    ]
}

/// Default layout for player 1: WASD + Q.
pub fn player1_layout() -> Vec<(KeyCode, Button)> {
    vec![
        (KeyCode::KeyA, Button::Left),
        (KeyCode::KeyD, Button::Right),
        (KeyCode::KeyW, Button::Up),
        (KeyCode::KeyS, Button::Down),
        (KeyCode::KeyQ, Button::Action),
    ]
}
