/// Stochastic mechanics: seeded helpers over `bevy_prng::WyRand`.
/// Callers own the RNG so a run is reproducible from its seed.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// Build a `WyRand` from a `u64` seed.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform draw in [0, 1) with 53 bits of precision.
#[inline]
pub fn unit_f64(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Bernoulli(p).
#[inline]
pub fn bernoulli(rng: &mut WyRand, p: f64) -> bool {
    unit_f64(rng) < p.clamp(0.0, 1.0)
}

/// Uniform index in [0, len). `None` when `len == 0`.
#[inline]
pub fn pick_index(rng: &mut WyRand, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(((unit_f64(rng) * len as f64) as usize).min(len - 1))
}
