#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(missing_docs)]
//! Library entry for the DLMM Bin-Distribution Planner.
//!
//! This crate plans how a liquidity deposit is spread across the discrete
//! price bins of a Liquidity-Book-style (DLMM) AMM: pick a shape strategy
//! and a bin count, get back exact fixed-point weight arrays ready to embed
//! into a liquidity-add transaction.
//!
//! # Modules
//! - [`strategy`]: Shape strategies (uniform, bell-curve, U-shape)
//! - [`planner`]: Fixed-point distribution planning
//! - [`verifier`]: Invariant checks on produced plans
//! - [`report`]: CSV / JSON export
//! - [`plot`]: Visualization (optional in binaries)

/// Liquidity shape strategies over a bin range
pub mod strategy;

/// Fixed-point bin-distribution planning
pub mod planner;

/// Invariant checks for produced plans
pub mod verifier;

/// CSV and JSON plan export
pub mod report;

/// Visualization utilities for generating charts
pub mod plot;
