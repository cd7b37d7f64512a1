//! Invariant checks for produced bin plans

use crate::planner::BinPlan;
use anyhow::{anyhow, Result};

/// Verification report for a single plan
#[derive(Debug)]
pub struct Report {
    /// Number of bins checked
    pub bins: usize,
    /// Exact base-side (X) weight sum
    pub sum_x: u64,
    /// Exact quote-side (Y) weight sum
    pub sum_y: u64,
    /// Index of the active bin
    pub active_index: usize,
    /// Whether delta_ids form a contiguous ascending run
    pub contiguous_ok: bool,
}

/// Re-checks every distribution invariant on `plan` against `precision`.
///
/// Errors on length mismatches, a missing or duplicated active bin, weight
/// leaking onto the wrong side of the active price, or a nonzero side whose
/// sum is not exactly `precision`.
pub fn verify_plan(plan: &BinPlan, precision: u64) -> Result<Report> {
    let n = plan.delta_ids.len();
    if plan.weight_x.len() != n || plan.weight_y.len() != n {
        return Err(anyhow!(
            "column length mismatch: {} delta_ids, {} weight_x, {} weight_y",
            n,
            plan.weight_x.len(),
            plan.weight_y.len()
        ));
    }

    let zeros = plan.delta_ids.iter().filter(|&&d| d == 0).count();
    if zeros != 1 {
        return Err(anyhow!("expected exactly one active bin, found {}", zeros));
    }
    let active_index = plan
        .active_index()
        .ok_or_else(|| anyhow!("no active bin"))?;

    let mut contiguous_ok = true;
    for i in 1..n {
        if plan.delta_ids[i] != plan.delta_ids[i - 1] + 1 {
            contiguous_ok = false;
        }
    }

    for i in 0..n {
        if plan.delta_ids[i] < 0 && plan.weight_x[i] != 0 {
            return Err(anyhow!(
                "base-side weight below the active price at delta_id {}",
                plan.delta_ids[i]
            ));
        }
        if plan.delta_ids[i] > 0 && plan.weight_y[i] != 0 {
            return Err(anyhow!(
                "quote-side weight above the active price at delta_id {}",
                plan.delta_ids[i]
            ));
        }
    }

    let sum_x: u64 = plan.weight_x.iter().sum();
    let sum_y: u64 = plan.weight_y.iter().sum();
    if sum_x != 0 && sum_x != precision {
        return Err(anyhow!("weight_x sums to {} ≠ {}", sum_x, precision));
    }
    if sum_y != 0 && sum_y != precision {
        return Err(anyhow!("weight_y sums to {} ≠ {}", sum_y, precision));
    }

    Ok(Report {
        bins: n,
        sum_x,
        sum_y,
        active_index,
        contiguous_ok,
    })
}
