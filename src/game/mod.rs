// Game layer: players and the simulation that owns them

pub mod player;
pub mod simulation;

pub use player::Player;
pub use simulation::GameState;
