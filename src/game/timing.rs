pub const BASE_TIME_SECS: u32 = 20;
pub const MIN_TIME_SECS: u32 = 2;
pub const LEVELS_PER_STEP: u32 = 5;
pub const SECS_PER_STEP: u32 = 2;

/// Seconds allotted to type the word at `level`.
///
/// Starts at 20s and drops by 2s every 5 levels, never going below 2s.
/// Level 0 is treated as level 1.
pub fn time_for_level(level: u32) -> u32 {
    let steps = level.saturating_sub(1) / LEVELS_PER_STEP;
    BASE_TIME_SECS
        .saturating_sub(steps.saturating_mul(SECS_PER_STEP))
        .max(MIN_TIME_SECS)
}
