mod planner;
mod plot;
mod report;
mod strategy;
mod verifier;

use crate::planner::{plan_with_precision, BinPlan, PRECISION};
use crate::plot::{plot_distribution, plot_raw_shape};
use crate::report::{write_plan_csv, write_plan_json};
use crate::strategy::Strategy;
use crate::verifier::verify_plan;

use anyhow::{anyhow, Result};
use clap::Parser;
use std::fs::create_dir_all;

#[derive(Parser, Debug)]
#[command(
    name = "binplan",
    version,
    about = "DLMM liquidity bin-distribution planner + verifier"
)]
struct Args {
    /// Shape strategy: uniform, bell-curve or u-shape
    #[arg(long, default_value = "uniform")]
    strategy: String,

    /// Number of bins in the deposit range
    #[arg(long, default_value_t = 10)]
    bins: i64,

    /// Fixed-point scale each side must sum to; must match the contract
    #[arg(long, default_value_t = PRECISION)]
    precision: u64,

    /// Also emit plan.json (the raw parameter block for a transaction builder)
    #[arg(long, action = clap::ArgAction::SetTrue)]
    json: bool,

    #[arg(long, default_value = "out")]
    out_dir: String,
    #[arg(long = "no-draw", action = clap::ArgAction::SetFalse, default_value_t = true)]
    draw: bool,
    #[arg(long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

fn validate_inputs(args: &Args) -> Result<()> {
    if args.bins < 1 {
        return Err(anyhow!("bins must be ≥ 1 (got {})", args.bins));
    }
    if args.precision == 0 {
        return Err(anyhow!("precision must be ≥ 1"));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    validate_inputs(&args)?;

    let strategy: Strategy = args.strategy.parse()?;
    let plan: BinPlan = plan_with_precision(strategy, args.bins, args.precision)?;
    let rep = verify_plan(&plan, args.precision)?;

    if args.verbose {
        println!(
            "[{}] bins={} active_index={} sumX={} sumY={} contiguous={}",
            strategy, rep.bins, rep.active_index, rep.sum_x, rep.sum_y, rep.contiguous_ok
        );
        println!(
            "  Offsets: {}..={}",
            plan.delta_ids.first().copied().unwrap_or(0),
            plan.delta_ids.last().copied().unwrap_or(0)
        );
        println!(
            "  Active bin weights: X={} Y={}",
            plan.weight_x[rep.active_index], plan.weight_y[rep.active_index]
        );
    }

    create_dir_all(&args.out_dir)?;
    write_plan_csv(&args.out_dir, strategy, &plan, args.precision)?;
    if args.json {
        write_plan_json(&args.out_dir, &plan)?;
    }
    if args.draw {
        plot_distribution(
            &plan,
            args.precision,
            &format!("{}/distribution.png", &args.out_dir),
        )?;
        plot_raw_shape(
            strategy,
            plan.num_bins(),
            &format!("{}/raw_shape.png", &args.out_dir),
        )?;
    }
    Ok(())
}
