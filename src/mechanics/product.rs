/// Aggregate production: product of per-producer multipliers.

/// Product of all multipliers. Empty input yields 1.0.
#[inline]
pub fn total_multiplier<I: IntoIterator<Item = f64>>(multipliers: I) -> f64 {
    multipliers.into_iter().fold(1.0, |acc, m| acc * m)
}

/// Rate rounded to hundredths for display (e.g. 1.5/sec → 150).
#[inline]
pub fn to_hundredths(rate: f64) -> i64 {
    (rate * 100.0 + 0.5).floor() as i64
}
