// src/snapshot.rs

//! Read-only views of the state for the render side.

use serde::Serialize;

use crate::mechanics::{cost, product};
use crate::producer::{Producer, ProducerId};
use crate::state::GameState;

/// Everything a frame needs to paint one producer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProducerView {
    pub id: ProducerId,
    pub name: &'static str,
    pub description: &'static str,
    pub level: u32,
    pub cost: f64,
    pub speed_per_level: f64,
    pub rotation_angle: f64,
    pub mana_multiplier: f64,
    pub maxed: bool,
    pub affordable: bool,
}

impl ProducerView {
    fn of(p: &Producer, mana: f64) -> Self {
        Self {
            id: p.id(),
            name: p.name(),
            description: p.description(),
            level: p.level(),
            cost: p.cost(),
            speed_per_level: p.speed_per_level(),
            rotation_angle: p.rotation_angle(),
            mana_multiplier: p.mana_multiplier(),
            maxed: p.is_maxed(),
            affordable: !p.is_maxed() && cost::affordable(mana, p.cost()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub mana: f64,
    pub tick_accumulator: u32,
    pub ticks_elapsed: u64,
    pub total_multiplier: f64,
    /// Display rate in hundredths of mana/sec.
    pub rate_hundredths: i64,
    pub producers: [ProducerView; ProducerId::COUNT],
}

impl Snapshot {
    pub(crate) fn capture(st: &GameState) -> Self {
        let mana = st.mana();
        Self {
            mana,
            tick_accumulator: st.tick_accumulator(),
            ticks_elapsed: st.ticks_elapsed(),
            total_multiplier: st.total_multiplier(),
            rate_hundredths: product::to_hundredths(st.total_multiplier()),
            producers: st.producers().each_ref().map(|p| ProducerView::of(p, mana)),
        }
    }

    pub fn producer(&self, id: ProducerId) -> &ProducerView {
        &self.producers[id.index()]
    }

    /// `"Mana: 12.34"`
    pub fn mana_line(&self) -> String {
        format!("Mana: {:.2}", self.mana)
    }

    /// `"1.00 x 1.02 x 1.00 x 1.00 = 1.02/sec"`
    pub fn multiplier_line(&self) -> String {
        let factors = self
            .producers
            .iter()
            .map(|p| format!("{:.2}", p.mana_multiplier))
            .collect::<Vec<_>>()
            .join(" x ");
        format!("{factors} = {:.2}/sec", self.total_multiplier)
    }
}
