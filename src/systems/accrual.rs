//! Per-second accrual.
//!
//! Mana is credited in whole multiplier-seconds: every `TICKS_PER_SECOND`
//! ticks the cached total is refreshed and added to the pool once.

use tracing::trace;

use crate::state::{GameState, TICKS_PER_SECOND};

/// Advance the tick accumulator; on the boundary, credit and return the amount.
pub(crate) fn step(st: &mut GameState) -> Option<f64> {
    st.tick_accumulator += 1;
    if st.tick_accumulator < TICKS_PER_SECOND {
        return None;
    }
    st.tick_accumulator = 0;
    st.recompute_total();

    let rate = st.total_multiplier;
    if rate > 0.0 {
        st.mana += rate;
        trace!(target: "mana.accrual", credited = rate, mana = st.mana, "per-second credit");
        Some(rate)
    } else {
        None
    }
}
