// Player entity: position, pose, and time-scaled movement

use crate::core::math::{trunc_phase, trunc_scale};
use crate::engine::input::{Button, ButtonStates, PlayerId};
use crate::engine::render::RenderSurface;
use glam::Vec2;

/// Sprite-sheet row offsets for the four walk directions. Rows hold
/// `FRAMES_PER_ROW` frames each; the active frame within a row follows the
/// coordinate the player is moving along.
const POSE_ROW_DOWN: i32 = 0;
const POSE_ROW_LEFT: i32 = 3;
const POSE_ROW_RIGHT: i32 = 6;
const POSE_ROW_UP: i32 = 9;

/// Walk frames per direction row.
const FRAMES_PER_ROW: i32 = 3;

/// Pixels of travel per walk-cycle frame advance.
const WALK_STRIDE_PX: i32 = 8;

/// A player-controlled sprite.
///
/// Created once at simulation construction and never destroyed; mutated
/// only by its own `update`.
#[derive(Debug)]
pub struct Player {
    /// Stable roster id; also selects which character sprite is drawn.
    pub id: PlayerId,
    /// Position in pixels.
    pub pos: Vec2,
    /// Sprite frame index currently shown.
    pub pose: i32,
    /// Per-player multiplier turning elapsed milliseconds into pixels.
    /// Fixed for the session; in (0, 1].
    pub speed_factor: f32,
}

impl Player {
    /// Create a player at a spawn point.
    pub fn new(id: PlayerId, spawn: Vec2, speed_factor: f32) -> Self {
        Self {
            id,
            pos: spawn,
            pose: POSE_ROW_DOWN,
            speed_factor,
        }
    }

    /// Advance position and pose for one frame.
    ///
    /// The elapsed time is scaled by `speed_factor` and truncated toward
    /// zero into a whole-pixel step. The four directions are checked in a
    /// fixed order and applied independently — holding two at once moves
    /// diagonally. A later direction's pose assignment overwrites an
    /// earlier one's, so with Left and Down both held the Down pose shows.
    /// The Action button is a reserved hook and does nothing yet.
    pub fn update(&mut self, delta_ms: f32, keys: ButtonStates) {
        let step = trunc_scale(delta_ms, self.speed_factor) as f32;

        if keys.is_pressed(Button::Left) {
            self.pos.x -= step;
            self.pose = POSE_ROW_LEFT + self.walk_phase(self.pos.x);
        }
        if keys.is_pressed(Button::Right) {
            self.pos.x += step;
            self.pose = POSE_ROW_RIGHT + self.walk_phase(self.pos.x);
        }
        if keys.is_pressed(Button::Up) {
            self.pos.y -= step;
            self.pose = POSE_ROW_UP + self.walk_phase(self.pos.y);
        }
        if keys.is_pressed(Button::Down) {
            self.pos.y += step;
            self.pose = POSE_ROW_DOWN + self.walk_phase(self.pos.y);
        }
    }

    /// Emit this player's sprite placement. Purely observational.
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.put_sprite(self.pos.x, self.pos.y, self.id, self.pose);
    }

    fn walk_phase(&self, coord: f32) -> i32 {
        trunc_phase(coord, WALK_STRIDE_PX, FRAMES_PER_ROW)
    }
}
