//! Visualization utilities for generating charts

use crate::planner::BinPlan;
use crate::strategy::Strategy;
use anyhow::Result;
use plotters::prelude::*;

/// Generates a per-bin distribution chart: base-side (X) weights in red,
/// quote-side (Y) weights in blue, as fractions of `precision`.
pub fn plot_distribution(plan: &BinPlan, precision: u64, out_path: &str) -> Result<()> {
    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let p = precision as f64;
    let xs: Vec<(f64, f64)> = plan
        .delta_ids
        .iter()
        .zip(&plan.weight_x)
        .map(|(&d, &w)| (d as f64, w as f64 / p))
        .collect();
    let ys: Vec<(f64, f64)> = plan
        .delta_ids
        .iter()
        .zip(&plan.weight_y)
        .map(|(&d, &w)| (d as f64, w as f64 / p))
        .collect();

    let d_min = plan.delta_ids.first().copied().unwrap_or(0) as f64;
    let d_max = plan.delta_ids.last().copied().unwrap_or(0) as f64;
    let y_max = xs
        .iter()
        .chain(ys.iter())
        .map(|(_, y)| *y)
        .fold(0.0, f64::max)
        .max(1e-12);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Weight per Bin (fraction of precision)", ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(d_min..(d_max + 1.0).max(d_min + 1.0), 0.0..(y_max * 1.05))?;
    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(xs, &RED))?;
    chart.draw_series(LineSeries::new(ys, &BLUE))?;
    root.present()?;
    Ok(())
}

/// Generates a line chart of the raw (pre-normalization) strategy shape
pub fn plot_raw_shape(strategy: Strategy, num_bins: usize, out_path: &str) -> Result<()> {
    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let pts: Vec<(f64, f64)> = strategy
        .raw_weights(num_bins)
        .into_iter()
        .enumerate()
        .map(|(i, w)| (i as f64, w))
        .collect();
    let x_max = (num_bins as f64).max(1.0);
    let y_max = pts.iter().map(|(_, y)| *y).fold(0.0, f64::max).max(1e-12);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Raw Strategy Shape", ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..(y_max * 1.05))?;
    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(pts, &BLACK))?;
    root.present()?;
    Ok(())
}
