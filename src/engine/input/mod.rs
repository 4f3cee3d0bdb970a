// Input handling system
//
// Normalizes heterogeneous input sources into one per-player button table:
//
// - `action`: the logical button set and default keyboard layouts
// - `bindings`: typed key-binding table, validated at construction
// - `keystate`: per-player button state read by the simulation
// - `gamepad`: per-frame gamepad polling (gilrs)
//
// Keyboard events and gamepad polls both write the same table; whoever
// writes last within a frame wins.

pub mod action;
pub mod bindings;
pub mod gamepad;
pub mod keystate;

// Re-export commonly used types
pub use action::{Button, PlayerId};
pub use bindings::{BindingError, BindingTable};
pub use gamepad::GamepadPoller;
pub use keystate::{ButtonStates, KeyStateTable};
