// Render surface seam
//
// The simulation never rasterizes anything itself; it emits a small stream
// of draw commands (clear, then one sprite placement per player) through
// this trait, once per frame. A real renderer lives behind the trait and
// is free to ignore, batch, or reorder nothing — command order is part of
// the contract (clear first, players in roster order).

use crate::engine::input::PlayerId;
use log::trace;

/// Receiver for one frame's draw commands. Assumed infallible; a broken
/// backend is not the simulation's concern.
pub trait RenderSurface {
    /// Wipe the previous frame.
    fn clear(&mut self);

    /// Place the sprite of `character` at `(x, y)` showing frame `pose`.
    fn put_sprite(&mut self, x: f32, y: f32, character: PlayerId, pose: i32);
}

/// Surface that logs every command at trace level. Stands in for a real
/// renderer while keeping the frame loop observable.
#[derive(Debug, Default)]
pub struct TraceSurface;

impl RenderSurface for TraceSurface {
    fn clear(&mut self) {
        trace!("clear");
    }

    fn put_sprite(&mut self, x: f32, y: f32, character: PlayerId, pose: i32) {
        trace!("put_sprite character={} pose={} at ({}, {})", character, pose, x, y);
    }
}

/// One recorded draw command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear,
    PutSprite {
        x: f32,
        y: f32,
        character: PlayerId,
        pose: i32,
    },
}

/// Surface that records the command stream; used by tests and headless
/// runs to assert on exactly what would have been drawn.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last `take`.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn put_sprite(&mut self, x: f32, y: f32, character: PlayerId, pose: i32) {
        self.commands.push(DrawCommand::PutSprite {
            x,
            y,
            character,
            pose,
        });
    }
}
