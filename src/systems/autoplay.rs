//! Seeded autoplay and deterministic replay.
//!
//! The autoplayer stands in for the input side: every `decide_every_ticks`
//! it may buy one affordable producer, chosen by [`Policy`]. Every successful
//! purchase is recorded as an [`Input`], and [`Replay::play`] rebuilds the
//! identical state from a fresh game by feeding the same ticks and purchases.

use bevy_prng::WyRand;
use serde::Serialize;
use tracing::debug;

use crate::mechanics::stoch;
use crate::producer::ProducerId;
use crate::state::{GameState, TICKS_PER_SECOND};
use crate::systems::purchase::PurchaseOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Always the cheapest affordable producer.
    Cheapest,
    /// Uniformly among affordable producers.
    Random,
}

#[derive(Clone, Copy, Debug)]
pub struct AutoplayConfig {
    pub policy: Policy,
    pub decide_every_ticks: u32,
    /// Chance to act at a decision point when something is affordable.
    pub act_chance: f64,
    pub seed: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            policy: Policy::Cheapest,
            decide_every_ticks: TICKS_PER_SECOND,
            act_chance: 1.0,
            seed: 0x5EED,
        }
    }
}

/// A purchase made when `ticks_elapsed == tick`, before that tick's advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Input {
    pub tick: u64,
    pub producer: ProducerId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Replay {
    pub inputs: Vec<Input>,
}

impl Replay {
    pub fn push(&mut self, tick: u64, producer: ProducerId) {
        self.inputs.push(Input { tick, producer });
    }

    pub fn len(&self) -> usize { self.inputs.len() }
    pub fn is_empty(&self) -> bool { self.inputs.is_empty() }

    /// Run a fresh game for `total_ticks`, applying inputs at their ticks.
    /// Inputs must be in tick order; inputs at or past `total_ticks` are ignored.
    pub fn play(&self, total_ticks: u64) -> GameState {
        let mut st = GameState::new();
        for input in &self.inputs {
            if input.tick >= total_ticks {
                break;
            }
            while st.ticks_elapsed() < input.tick {
                st.advance();
            }
            let _ = st.purchase(input.producer);
        }
        while st.ticks_elapsed() < total_ticks {
            st.advance();
        }
        st
    }
}

pub struct Autoplayer {
    cfg: AutoplayConfig,
    rng: WyRand,
    replay: Replay,
}

impl Autoplayer {
    pub fn new(cfg: AutoplayConfig) -> Self {
        Self { cfg, rng: stoch::seeded(cfg.seed), replay: Replay::default() }
    }

    pub fn config(&self) -> AutoplayConfig { self.cfg }
    pub fn replay(&self) -> &Replay { &self.replay }
    pub fn into_replay(self) -> Replay { self.replay }

    /// Pick a producer to buy now, if any.
    pub fn decide(&mut self, st: &GameState) -> Option<ProducerId> {
        let candidates: Vec<ProducerId> = ProducerId::ALL
            .into_iter()
            .filter(|id| {
                let p = st.producer(*id);
                !p.is_maxed() && st.mana() >= p.cost()
            })
            .collect();
        if candidates.is_empty() || !stoch::bernoulli(&mut self.rng, self.cfg.act_chance) {
            return None;
        }
        match self.cfg.policy {
            Policy::Cheapest => candidates
                .into_iter()
                .min_by(|a, b| st.producer(*a).cost().total_cmp(&st.producer(*b).cost())),
            Policy::Random => {
                stoch::pick_index(&mut self.rng, candidates.len()).map(|i| candidates[i])
            }
        }
    }

    /// One tick of play: maybe purchase, then advance.
    pub fn step(&mut self, st: &mut GameState) -> Option<PurchaseOutcome> {
        let every = u64::from(self.cfg.decide_every_ticks.max(1));
        let mut outcome = None;
        if st.ticks_elapsed() % every == 0 {
            if let Some(id) = self.decide(st) {
                let tick = st.ticks_elapsed();
                let out = st.purchase(id);
                if out.is_purchased() {
                    self.replay.push(tick, id);
                }
                outcome = Some(out);
            }
        }
        st.advance();
        outcome
    }

    /// Play `ticks` ticks; returns the number of successful purchases.
    pub fn run(&mut self, st: &mut GameState, ticks: u64) -> usize {
        let mut bought = 0;
        for _ in 0..ticks {
            if self.step(st).is_some_and(|o| o.is_purchased()) {
                bought += 1;
            }
        }
        debug!(target: "mana.autoplay", ticks, bought, mana = st.mana(), "autoplay run finished");
        bought
    }
}
