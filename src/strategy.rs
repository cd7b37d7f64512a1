//! Liquidity shape strategies over a DLMM bin range

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::planner::PlanError;

/// Shape of a liquidity deposit across a contiguous range of price bins.
///
/// A closed set: each variant maps to a fixed weight formula, matched
/// exhaustively. Unknown names are rejected at the parse boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Equal weight in every bin
    Uniform,
    /// Gaussian weight concentrated near the active bin: exp(-(i-c)²/(2σ²)) with σ = n/4, c = n/2
    BellCurve,
    /// Weight concentrated at the range extremes: t² + 0.1 for t ∈ [-1, 1]
    UShape,
}

impl Strategy {
    /// Returns the canonical name of this strategy
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Uniform => "uniform",
            Strategy::BellCurve => "bell-curve",
            Strategy::UShape => "u-shape",
        }
    }

    /// Raw (pre-normalization) shape weight for bin `i` of `num_bins`.
    ///
    /// Weights are dimensionless and strictly positive; only their ratios
    /// matter, normalization happens later on an integer lattice. The
    /// bell curve pivots on the *float* center n/2, which is distinct from
    /// the integer index the delta offsets pivot on.
    pub fn raw_weight(&self, i: usize, num_bins: usize) -> f64 {
        let n = num_bins as f64;
        match self {
            Strategy::Uniform => 1.0,
            Strategy::BellCurve => {
                let sigma = n / 4.0;
                let d = i as f64 - n / 2.0;
                (-(d * d) / (2.0 * sigma * sigma)).exp()
            }
            Strategy::UShape => {
                if num_bins == 1 {
                    // Degenerate range: a single bin sits at t = 0.
                    return 0.1;
                }
                let half = (n - 1.0) / 2.0;
                let t = (i as f64 - half) / half;
                t * t + 0.1
            }
        }
    }

    /// Raw shape weights for every bin in `0..num_bins`
    pub fn raw_weights(&self, num_bins: usize) -> Vec<f64> {
        (0..num_bins).map(|i| self.raw_weight(i, num_bins)).collect()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Strategy::Uniform),
            "bell-curve" | "bell" => Ok(Strategy::BellCurve),
            "u-shape" | "ushape" => Ok(Strategy::UShape),
            other => Err(PlanError::InvalidStrategy(other.to_string())),
        }
    }
}
