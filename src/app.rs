// Application aggregate: everything the host callbacks touch, in one place
//
// There are no module-level statics. The winit callbacks only enqueue input
// events here; each driver tick drains the queue in FIFO order, polls
// gamepads, then runs update and draw. Events and ticks never run
// concurrently — the host dispatches callbacks one at a time, to
// completion — so a key toggled mid-frame lands either this frame or the
// next, and that is fine.

use crate::engine::frame_driver::FrameDriver;
use crate::engine::input::{BindingError, BindingTable, GamepadPoller};
use crate::engine::render::RenderSurface;
use crate::game::GameState;
use std::collections::VecDeque;
use std::time::Instant;
use winit::keyboard::KeyCode;

/// A raw input event queued by the host callbacks.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    Key { code: KeyCode, pressed: bool },
}

/// Owns the simulation, its input plumbing, the frame driver, and the
/// render surface.
pub struct Application<S: RenderSurface> {
    sim: GameState,
    bindings: BindingTable,
    gamepads: GamepadPoller,
    driver: FrameDriver,
    surface: S,
    events: VecDeque<InputEvent>,
    started: Instant,
}

impl<S: RenderSurface> Application<S> {
    /// Build the application with the default key layout.
    pub fn new(surface: S) -> Result<Self, BindingError> {
        Ok(Self {
            sim: GameState::new(),
            bindings: BindingTable::default_layout()?,
            gamepads: GamepadPoller::new(),
            driver: FrameDriver::new(),
            surface,
            events: VecDeque::new(),
            started: Instant::now(),
        })
    }

    /// Enqueue a key event; it is applied on the next tick.
    pub fn queue_key(&mut self, code: KeyCode, pressed: bool) {
        self.events.push_back(InputEvent::Key { code, pressed });
    }

    /// Milliseconds since the application was created.
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Tick with the current wall-clock timestamp.
    pub fn tick_now(&mut self) {
        let timestamp = self.now_ms();
        self.tick(timestamp);
    }

    /// Run one frame for the given host timestamp (milliseconds).
    ///
    /// The first tick only primes the driver's clock; queued events stay
    /// queued until the first running tick. Running ticks drain the event
    /// queue, poll gamepads (gamepad state overwrites keyboard state),
    /// update the simulation by the raw elapsed time, and draw.
    pub fn tick(&mut self, timestamp_ms: f64) {
        let Some(delta) = self.driver.tick(timestamp_ms) else {
            return;
        };

        while let Some(event) = self.events.pop_front() {
            match event {
                InputEvent::Key { code, pressed } => {
                    self.sim.process_key(&self.bindings, code, pressed);
                }
            }
        }

        self.gamepads.poll(self.sim.keys_mut());
        self.sim.update(delta as f32);
        self.sim.draw(&mut self.surface);
    }

    /// The simulation, for inspection.
    pub fn sim(&self) -> &GameState {
        &self.sim
    }

    /// The render surface, for inspection.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
