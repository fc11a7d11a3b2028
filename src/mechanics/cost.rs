/// Cost mechanics: geometric upgrade pricing.

/// Price after one purchase: cost * growth.
#[inline]
pub fn next_cost(cost: f64, growth: f64) -> f64 {
    cost * growth
}

/// Whether `mana` covers `cost`.
#[inline]
pub fn affordable(mana: f64, cost: f64) -> bool {
    mana >= cost
}

/// Price of the `n`-th purchase from `base` (n = 0 is the first).
#[inline]
pub fn cost_at(base: f64, growth: f64, n: u32) -> f64 {
    base * growth.powi(n as i32)
}
