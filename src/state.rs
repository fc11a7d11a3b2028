// src/state.rs

//! The simulation state machine.
//!
//! One owner, one thread: [`GameState::advance`] runs once per fixed tick and
//! [`GameState::purchase`] runs between ticks in response to a discrete input.
//! Neither blocks nor does I/O, so there is nothing to lock. Presentation code
//! reads through accessors or [`GameState::snapshot`] and never mutates.

use crate::error::Error;
use crate::mechanics::product;
use crate::producer::{Producer, ProducerId};
use crate::snapshot::Snapshot;
use crate::systems::purchase::PurchaseOutcome;
use crate::systems::{accrual, purchase, rotation};

/// Fixed logical rate of [`GameState::advance`].
pub const TICKS_PER_SECOND: u32 = 60;

/// What one tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Mana credited this tick (only on the once-per-second boundary).
    pub credited: Option<f64>,
    /// Producers that completed a revolution this tick, by index.
    pub revolutions: [bool; ProducerId::COUNT],
}

impl TickReport {
    pub fn revolution_count(&self) -> usize {
        self.revolutions.iter().filter(|r| **r).count()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub(crate) mana: f64,
    pub(crate) producers: [Producer; ProducerId::COUNT],
    /// Ticks since the last accrual, in [0, TICKS_PER_SECOND).
    pub(crate) tick_accumulator: u32,
    pub(crate) ticks_elapsed: u64,
    /// Cached product of all producer multipliers.
    pub(crate) total_multiplier: f64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: no mana, every producer at its starting constants.
    pub fn new() -> Self {
        let mut st = Self {
            mana: 0.0,
            producers: ProducerId::ALL.map(Producer::new),
            tick_accumulator: 0,
            ticks_elapsed: 0,
            total_multiplier: 1.0,
        };
        st.recompute_total();
        st
    }

    /// Fresh game with a starting balance. Negative or NaN balances become 0.
    pub fn with_mana(mana: f64) -> Self {
        let mut st = Self::new();
        st.mana = mana.max(0.0);
        st
    }

    /// One fixed tick: accrue on the per-second boundary, then rotate.
    pub fn advance(&mut self) -> TickReport {
        self.ticks_elapsed += 1;
        let credited = accrual::step(self);
        let revolutions = rotation::step(self);
        if revolutions.iter().any(|r| *r) {
            self.recompute_total();
        }
        TickReport { credited, revolutions }
    }

    /// Run `ticks` fixed ticks; returns how many revolutions completed in total.
    pub fn advance_by(&mut self, ticks: u64) -> usize {
        let mut revs = 0;
        for _ in 0..ticks {
            revs += self.advance().revolution_count();
        }
        revs
    }

    /// Buy one level of `id`. Ineligible purchases leave every field untouched.
    pub fn purchase(&mut self, id: ProducerId) -> PurchaseOutcome {
        purchase::attempt(self, id)
    }

    /// Index-based entry point for adapters that only know positions.
    pub fn purchase_index(&mut self, index: usize) -> Result<PurchaseOutcome, Error> {
        let id = ProducerId::try_from(index)?;
        Ok(self.purchase(id))
    }

    pub fn mana(&self) -> f64 { self.mana }
    pub fn tick_accumulator(&self) -> u32 { self.tick_accumulator }
    pub fn ticks_elapsed(&self) -> u64 { self.ticks_elapsed }
    pub fn total_multiplier(&self) -> f64 { self.total_multiplier }
    pub fn producers(&self) -> &[Producer; ProducerId::COUNT] { &self.producers }

    pub fn producer(&self, id: ProducerId) -> &Producer {
        &self.producers[id.index()]
    }

    /// Read-only view for rendering. Pure: two calls with no mutation in
    /// between compare equal.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    pub(crate) fn recompute_total(&mut self) {
        self.total_multiplier =
            product::total_multiplier(self.producers.iter().map(|p| p.mana_multiplier));
    }
}
