//! Purchase validation and application.

use serde::Serialize;
use tracing::{debug, trace};

use crate::mechanics::cost;
use crate::producer::ProducerId;
use crate::state::GameState;

/// Result of a purchase attempt. Only `Purchased` changes state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PurchaseOutcome {
    Purchased { cost_paid: f64, new_level: u32 },
    InsufficientFunds { cost: f64, mana: f64 },
    MaxLevel,
}

impl PurchaseOutcome {
    pub fn is_purchased(&self) -> bool {
        matches!(self, PurchaseOutcome::Purchased { .. })
    }
}

/// Funds are checked before the level cap; a broke player at max level sees
/// `InsufficientFunds`.
pub(crate) fn attempt(st: &mut GameState, id: ProducerId) -> PurchaseOutcome {
    let mana = st.mana;
    let p = &st.producers[id.index()];

    if !cost::affordable(mana, p.cost) {
        trace!(target: "mana.purchase", producer = p.name(), cost = p.cost, mana, "insufficient funds");
        return PurchaseOutcome::InsufficientFunds { cost: p.cost, mana };
    }
    if p.is_maxed() {
        trace!(target: "mana.purchase", producer = p.name(), "already at max level");
        return PurchaseOutcome::MaxLevel;
    }

    let p = &mut st.producers[id.index()];
    let cost_paid = p.cost;
    p.level += 1;
    p.cost = cost::next_cost(p.cost, id.spec().cost_growth);
    let new_level = p.level;
    let next_cost = p.cost;

    st.mana -= cost_paid;
    st.recompute_total();

    debug!(
        target: "mana.purchase",
        producer = id.spec().name,
        cost_paid,
        new_level,
        next_cost,
        mana = st.mana,
        "purchased"
    );
    PurchaseOutcome::Purchased { cost_paid, new_level }
}
