// Engine modules: frame timing, input, render seam

pub mod frame_driver;
pub mod input;
pub mod render;
