//! Rotation and multiplier growth.
//!
//! Each active producer turns at `speed_per_level * level` revolutions/sec.
//! Crossing 2π grants one `MULTIPLIER_STEP`. At most one grant and one wrap
//! happen per producer per tick, even if the step spans several turns.

use tracing::debug;

use crate::mechanics::rotation;
use crate::producer::{MULTIPLIER_STEP, ProducerId};
use crate::state::{GameState, TICKS_PER_SECOND};

/// Rotate every active producer; returns which ones completed a revolution.
pub(crate) fn step(st: &mut GameState) -> [bool; ProducerId::COUNT] {
    let mut crossed = [false; ProducerId::COUNT];

    for (i, p) in st.producers.iter_mut().enumerate() {
        if !p.is_active() {
            continue;
        }
        let spec = p.id.spec();
        let old = p.rotation_angle;
        let new = old + rotation::radians_per_tick(spec.speed_per_level, p.level, TICKS_PER_SECOND);

        if rotation::crossed_full_turn(old, new) {
            p.mana_multiplier += MULTIPLIER_STEP;
            crossed[i] = true;
            debug!(
                target: "mana.rotation",
                producer = spec.name,
                level = p.level,
                multiplier = p.mana_multiplier,
                "revolution complete"
            );
        }
        p.rotation_angle = rotation::wrap_once(new);
    }

    crossed
}
