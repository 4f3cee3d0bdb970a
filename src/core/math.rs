// Math utilities and helper functions

/// Scale a value by a factor and truncate toward zero.
///
/// Used to turn an elapsed-time delta into a whole-pixel movement step.
/// Truncation (not flooring) matters for negative values: the pose
/// arithmetic downstream assumes round-toward-zero semantics.
pub fn trunc_scale(value: f32, factor: f32) -> i32 {
    (value * factor).trunc() as i32
}

/// Phase of a coordinate within a repeating cycle of cells:
/// `trunc(coord / cell) % cycle`.
///
/// Both the division and the remainder truncate toward zero (Rust's native
/// integer semantics), so negative coordinates yield negative phases.
pub fn trunc_phase(coord: f32, cell: i32, cycle: i32) -> i32 {
    (coord as i32 / cell) % cycle
}
