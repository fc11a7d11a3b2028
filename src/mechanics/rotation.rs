/// Rotation mechanics: angular speed, full-turn detection, wrapping.
use std::f64::consts::TAU;

/// Radians advanced per tick for `speed_per_level * level` revolutions/sec
/// at `ticks_per_second`.
#[inline]
pub fn radians_per_tick(speed_per_level: f64, level: u32, ticks_per_second: u32) -> f64 {
    let revs_per_sec = speed_per_level * f64::from(level);
    revs_per_sec * TAU / f64::from(ticks_per_second.max(1))
}

/// True when this step moved the angle across the 2π threshold.
/// Only the first threshold counts, however far `new` overshoots.
#[inline]
pub fn crossed_full_turn(old: f64, new: f64) -> bool {
    old < TAU && new >= TAU
}

/// Subtract one full turn if the angle reached 2π. Does not fully normalize.
#[inline]
pub fn wrap_once(angle: f64) -> f64 {
    if angle >= TAU { angle - TAU } else { angle }
}
