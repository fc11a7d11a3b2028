//! Frame loop glue between a host window and the state machine.
//!
//! Per frame: poll the pointer, turn a fresh click inside a zone into one
//! `purchase`, then run however many fixed ticks the elapsed time covers.
//! Input is handled before ticks, so a purchase always lands between ticks.

use std::time::Duration;

use crate::presentation::input::{ClickLatch, PointerState};
use crate::presentation::layout::Layout;
use crate::producer::ProducerId;
use crate::snapshot::Snapshot;
use crate::state::GameState;
use crate::systems::frame_clock::{ClockConfig, FrameClock};
use crate::systems::purchase::PurchaseOutcome;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Zone hit by a fresh click, if any.
    pub clicked: Option<ProducerId>,
    pub purchase: Option<PurchaseOutcome>,
    pub ticks_run: u32,
}

pub struct Session {
    state: GameState,
    clock: FrameClock,
    latch: ClickLatch,
    layout: Layout,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self::with_config(state, ClockConfig::default(), Layout::default())
    }

    pub fn with_config(state: GameState, clock: ClockConfig, layout: Layout) -> Self {
        Self { state, clock: FrameClock::new(clock), latch: ClickLatch::default(), layout }
    }

    pub fn state(&self) -> &GameState { &self.state }
    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn clock(&self) -> &FrameClock { &self.clock }
    pub fn snapshot(&self) -> Snapshot { self.state.snapshot() }
    pub fn into_state(self) -> GameState { self.state }

    /// Variable-rate frame: input, then `elapsed` worth of fixed ticks.
    pub fn frame(&mut self, elapsed: Duration, ptr: PointerState) -> FrameReport {
        let mut report = self.handle_input(ptr);
        report.ticks_run = self.clock.drive(&mut self.state, elapsed);
        report
    }

    /// Fixed-rate host (already calling at 60 Hz): input, then one tick.
    pub fn fixed_update(&mut self, ptr: PointerState) -> FrameReport {
        let mut report = self.handle_input(ptr);
        self.state.advance();
        report.ticks_run = 1;
        report
    }

    fn handle_input(&mut self, ptr: PointerState) -> FrameReport {
        let clicked = self
            .latch
            .poll(ptr)
            .and_then(|(x, y)| self.layout.hit_test(x, y));
        let purchase = clicked.map(|id| self.state.purchase(id));
        FrameReport { clicked, purchase, ticks_run: 0 }
    }
}
