//! Fixed-point bin-distribution planning
//!
//! Turns a shape strategy and a bin count into the per-bin weight arrays a
//! liquidity-add transaction embeds: signed bin offsets from the active bin,
//! plus one weight column per token side, each side summing to exactly
//! [`PRECISION`] whenever it holds any liquidity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strategy::Strategy;

/// Fixed-point scale each side's weights must sum to.
///
/// Must match the on-chain contract's precision constant exactly; a mismatch
/// silently corrupts the deposited liquidity ratios.
pub const PRECISION: u64 = 1_000_000_000_000_000_000;

/// Scale for lifting raw f64 shape weights onto an integer lattice before
/// normalization. Raw weights are ≤ 1.1, so scaled values stay well inside
/// f64's exact-integer range (2^53 ≈ 9.0e15).
const RAW_SCALE: f64 = 1e12;

/// Argument rejection for [`plan`]. Both variants are detectable before any
/// computation runs; there is no fallback distribution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// Bin count was zero or negative
    #[error("bin count must be ≥ 1 (got {0})")]
    InvalidBinCount(i64),
    /// Strategy name did not match any known variant
    #[error("unknown strategy: {0:?} (expected uniform, bell-curve or u-shape)")]
    InvalidStrategy(String),
}

/// A planned distribution: one row per bin, keyed by offset from the active bin.
///
/// Invariants upheld by construction:
/// - all three columns have equal length and exactly one `delta_id` is 0
/// - `delta_id < 0` rows carry only quote-side (`weight_y`) liquidity,
///   `delta_id > 0` rows only base-side (`weight_x`)
/// - each side sums to exactly the requested precision unless it is all-zero
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinPlan {
    /// Signed bin offsets from the active bin, e.g. -5..=4 for 10 bins
    pub delta_ids: Vec<i64>,
    /// Base-token (X) weight per bin, fixed-point
    pub weight_x: Vec<u64>,
    /// Quote-token (Y) weight per bin, fixed-point
    pub weight_y: Vec<u64>,
}

impl BinPlan {
    /// Number of bins in the plan
    pub fn num_bins(&self) -> usize {
        self.delta_ids.len()
    }

    /// Index of the active bin (`delta_id == 0`), if present
    pub fn active_index(&self) -> Option<usize> {
        self.delta_ids.iter().position(|&d| d == 0)
    }
}

/// Plans a distribution at the on-chain scale of [`PRECISION`].
pub fn plan(strategy: Strategy, num_bins: i64) -> Result<BinPlan, PlanError> {
    plan_with_precision(strategy, num_bins, PRECISION)
}

/// Plans a distribution at an explicit fixed-point scale.
///
/// Pure and deterministic: identical inputs yield bit-identical plans. The
/// active bin sits at index `floor(num_bins / 2)`, so an even bin count
/// places one more bin below the active price than above it.
pub fn plan_with_precision(
    strategy: Strategy,
    num_bins: i64,
    precision: u64,
) -> Result<BinPlan, PlanError> {
    if num_bins < 1 {
        return Err(PlanError::InvalidBinCount(num_bins));
    }
    let n = num_bins as usize;
    let center = n / 2;

    let delta_ids: Vec<i64> = (0..n).map(|i| i as i64 - center as i64).collect();

    // Lift the float shape onto an integer lattice; everything after this
    // line is pure integer arithmetic, so `precision` never meets a float.
    let units: Vec<u64> = strategy
        .raw_weights(n)
        .iter()
        .map(|w| (w * RAW_SCALE).round() as u64)
        .collect();

    // Partition each bin's weight onto exactly one side by offset sign; the
    // active bin splits evenly across both.
    let mut side_x = vec![0u64; n];
    let mut side_y = vec![0u64; n];
    for (i, &w) in units.iter().enumerate() {
        if delta_ids[i] < 0 {
            side_y[i] = w;
        } else if delta_ids[i] > 0 {
            side_x[i] = w;
        } else {
            side_x[i] = w / 2;
            side_y[i] = w / 2;
        }
    }

    let weight_x = normalize_side(&side_x, center, precision);
    let weight_y = normalize_side(&side_y, center, precision);

    Ok(BinPlan {
        delta_ids,
        weight_x,
        weight_y,
    })
}

/// Normalizes one side's weights to sum to exactly `precision`.
///
/// Each entry becomes `w * precision / total`, truncated, computed in u128 so
/// the product cannot overflow. Truncation can leave the side short by up to
/// `len - 1` units; the shortfall goes to the active-bin entry when the
/// active bin carries weight on this side, otherwise to the side's first
/// weighted entry. A side with no weight at all is left as zeros rather than
/// divided by zero.
fn normalize_side(units: &[u64], active: usize, precision: u64) -> Vec<u64> {
    let total: u128 = units.iter().map(|&w| w as u128).sum();
    if total == 0 {
        return vec![0; units.len()];
    }

    let mut out: Vec<u64> = units
        .iter()
        .map(|&w| (w as u128 * precision as u128 / total) as u64)
        .collect();

    let assigned: u64 = out.iter().sum();
    let shortfall = precision - assigned;
    if shortfall > 0 {
        let sink = if units[active] > 0 {
            active
        } else {
            units.iter().position(|&w| w > 0).unwrap_or(active)
        };
        out[sink] += shortfall;
    }
    out
}
