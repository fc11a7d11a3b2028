//! Fixed-step clock for variable-rate frames.
//!
//! Wall time is converted into a whole number of simulation ticks; the
//! fractional remainder is carried into the next frame so no time is lost.
//! The state machine only ever sees whole ticks.

use std::time::Duration;

use tracing::warn;

use crate::state::{GameState, TICKS_PER_SECOND};

const NANOS_PER_SEC: u128 = 1_000_000_000;

#[derive(Clone, Copy, Debug)]
pub struct ClockConfig {
    /// Ticks per wall-clock second. Values other than `TICKS_PER_SECOND`
    /// speed up or slow down the game.
    pub ticks_per_second: u32,
    /// Catch-up cap; ticks beyond it are dropped.
    pub max_ticks_per_frame: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { ticks_per_second: TICKS_PER_SECOND, max_ticks_per_frame: 240 }
    }
}

#[derive(Clone, Debug)]
pub struct FrameClock {
    cfg: ClockConfig,
    /// Leftover time scaled by `ticks_per_second` (nanos * tps).
    carry: u128,
    dropped: u64,
}

impl FrameClock {
    pub fn new(cfg: ClockConfig) -> Self {
        Self { cfg, carry: 0, dropped: 0 }
    }

    pub fn config(&self) -> ClockConfig { self.cfg }

    /// Ticks discarded so far by the catch-up cap.
    pub fn dropped_ticks(&self) -> u64 { self.dropped }

    /// Time not yet converted into a tick.
    pub fn pending(&self) -> Duration {
        let tps = u128::from(self.cfg.ticks_per_second.max(1));
        Duration::from_nanos((self.carry / tps) as u64)
    }

    /// Whole ticks covered by `elapsed` plus the carried remainder.
    pub fn ticks_for(&mut self, elapsed: Duration) -> u32 {
        let tps = u128::from(self.cfg.ticks_per_second.max(1));
        self.carry += elapsed.as_nanos() * tps;
        let whole = self.carry / NANOS_PER_SEC;
        self.carry %= NANOS_PER_SEC;

        let cap = u128::from(self.cfg.max_ticks_per_frame);
        if whole > cap {
            let lost = (whole - cap) as u64;
            self.dropped += lost;
            warn!(target: "mana.clock", lost, cap = self.cfg.max_ticks_per_frame, "frame too long; dropping ticks");
            return self.cfg.max_ticks_per_frame;
        }
        whole as u32
    }

    /// Convert `elapsed` to ticks and run them; returns ticks run.
    pub fn drive(&mut self, st: &mut GameState, elapsed: Duration) -> u32 {
        let n = self.ticks_for(elapsed);
        st.advance_by(u64::from(n));
        n
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}
