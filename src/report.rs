//! Plan export: CSV schedule and JSON parameter block

use crate::planner::BinPlan;
use crate::strategy::Strategy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

#[derive(Serialize, Deserialize)]
struct Row {
    delta_id: i64,
    weight_x: u64,
    weight_y: u64,
    weight_x_pct: f64,
    weight_y_pct: f64,
}

/// Writes `plan.csv` under `out_dir`: a commented metadata header followed by
/// one row per bin. The `*_pct` columns are display-only; the fixed-point
/// columns are the authoritative values.
pub fn write_plan_csv(
    out_dir: &str,
    strategy: Strategy,
    plan: &BinPlan,
    precision: u64,
) -> Result<()> {
    let file_path = format!("{}/plan.csv", out_dir);
    let mut file = File::create(&file_path)?;

    let sum_x: u64 = plan.weight_x.iter().sum();
    let sum_y: u64 = plan.weight_y.iter().sum();

    writeln!(file, "# DLMM Liquidity Bin Plan")?;
    writeln!(file, "# Strategy: {}", strategy)?;
    writeln!(file, "# Bins: {}", plan.num_bins())?;
    writeln!(file, "# Precision: {}", precision)?;
    writeln!(file, "# Sum X: {}  Sum Y: {}", sum_x, sum_y)?;
    writeln!(file)?;

    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.write_record([
        "delta_id",
        "weight_x",
        "weight_y",
        "weight_x_pct",
        "weight_y_pct",
    ])?;

    let p = precision as f64;
    for i in 0..plan.num_bins() {
        wtr.serialize(Row {
            delta_id: plan.delta_ids[i],
            weight_x: plan.weight_x[i],
            weight_y: plan.weight_y[i],
            weight_x_pct: 100.0 * plan.weight_x[i] as f64 / p,
            weight_y_pct: 100.0 * plan.weight_y[i] as f64 / p,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `plan.json` under `out_dir`: the raw [`BinPlan`] columns, ready to
/// embed into a liquidity-add transaction request.
pub fn write_plan_json(out_dir: &str, plan: &BinPlan) -> Result<()> {
    let file = File::create(format!("{}/plan.json", out_dir))?;
    serde_json::to_writer_pretty(file, plan)?;
    Ok(())
}
