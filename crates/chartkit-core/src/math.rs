// File: crates/chartkit-core/src/math.rs
// Summary: Divide-by-zero protection and small numeric helpers shared by every mapper.

/// Added to every resolved range so the denominator is never exactly zero.
pub const RANGE_EPSILON: f64 = 0.001;

/// `numerator / denominator`, or `0.0` when the denominator is zero.
///
/// Every scale ratio in the crate goes through this. Single-point series,
/// zero-size surfaces and constant series are all ordinary inputs and must
/// collapse to an edge instead of producing NaN or infinity.
#[inline]
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 { numerator / denominator } else { 0.0 }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

