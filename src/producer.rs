// src/producer.rs

//! Producers: stable ids, their static constants, and the mutable record.
//!
//! Per-producer differences (price, speed, cost growth) live in one table
//! keyed by [`ProducerId`], so no code path switches on position.

use serde::Serialize;

use crate::error::Error;

/// Purchases stop at this level.
pub const MAX_LEVEL: u32 = 100;
/// Multiplier gained per completed revolution.
pub const MULTIPLIER_STEP: f64 = 0.01;
/// Every producer's multiplier starts here.
pub const INITIAL_MULTIPLIER: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ProducerId {
    ManaCrystal = 0,
    ArcaneTower = 1,
    LeyLineNode = 2,
    ElderArtifact = 3,
}

impl ProducerId {
    pub const COUNT: usize = 4;

    pub const ALL: [ProducerId; Self::COUNT] = [
        ProducerId::ManaCrystal,
        ProducerId::ArcaneTower,
        ProducerId::LeyLineNode,
        ProducerId::ElderArtifact,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Static constants for this producer.
    #[inline]
    pub fn spec(self) -> &'static ProducerSpec {
        &SPECS[self.index()]
    }
}

impl TryFrom<usize> for ProducerId {
    type Error = Error;

    fn try_from(i: usize) -> Result<Self, Self::Error> {
        ProducerId::ALL
            .get(i)
            .copied()
            .ok_or(Error::UnknownProducer(i))
    }
}

/// Constants baked in at construction.
#[derive(Clone, Copy, Debug)]
pub struct ProducerSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: f64,
    /// Revolutions per second contributed by each level.
    pub speed_per_level: f64,
    pub starting_level: u32,
    /// Cost multiplier applied after every purchase.
    pub cost_growth: f64,
}

static SPECS: [ProducerSpec; ProducerId::COUNT] = [
    ProducerSpec {
        name: "Mana Crystal",
        description: "Basic mana generation crystal",
        base_cost: 3.0,
        speed_per_level: 0.1,
        starting_level: 5,
        cost_growth: 1.15,
    },
    ProducerSpec {
        name: "Arcane Tower",
        description: "Mystical mana channeling tower",
        base_cost: 50.0,
        speed_per_level: 0.08,
        starting_level: 0,
        cost_growth: 1.20,
    },
    ProducerSpec {
        name: "Ley Line Node",
        description: "Powerful magical energy nexus",
        base_cost: 250.0,
        speed_per_level: 0.05,
        starting_level: 0,
        cost_growth: 1.20,
    },
    ProducerSpec {
        name: "Elder Artifact",
        description: "Ancient relic of immense power",
        base_cost: 1000.0,
        speed_per_level: 0.02,
        starting_level: 0,
        cost_growth: 1.20,
    },
];

/// One upgradeable producer. Identity is fixed; the rest mutates.
#[derive(Clone, Debug, PartialEq)]
pub struct Producer {
    pub(crate) id: ProducerId,
    pub(crate) cost: f64,
    pub(crate) level: u32,
    /// Always in [0, 2π) except after a multi-turn overshoot.
    pub(crate) rotation_angle: f64,
    pub(crate) mana_multiplier: f64,
}

impl Producer {
    pub fn new(id: ProducerId) -> Self {
        let spec = id.spec();
        Self {
            id,
            cost: spec.base_cost,
            level: spec.starting_level,
            rotation_angle: 0.0,
            mana_multiplier: INITIAL_MULTIPLIER,
        }
    }

    pub fn id(&self) -> ProducerId { self.id }
    pub fn spec(&self) -> &'static ProducerSpec { self.id.spec() }
    pub fn name(&self) -> &'static str { self.spec().name }
    pub fn description(&self) -> &'static str { self.spec().description }
    pub fn speed_per_level(&self) -> f64 { self.spec().speed_per_level }
    pub fn cost(&self) -> f64 { self.cost }
    pub fn level(&self) -> u32 { self.level }
    pub fn rotation_angle(&self) -> f64 { self.rotation_angle }
    pub fn mana_multiplier(&self) -> f64 { self.mana_multiplier }

    /// Level-0 producers never rotate.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.level > 0
    }

    #[inline]
    pub fn is_maxed(&self) -> bool {
        self.level >= MAX_LEVEL
    }
}
