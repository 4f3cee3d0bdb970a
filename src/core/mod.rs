// Core utilities shared across the engine and game layers

pub mod math;
