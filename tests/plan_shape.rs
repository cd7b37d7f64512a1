use approx::assert_relative_eq;
use binplan::planner::{plan, BinPlan, PlanError, PRECISION};
use binplan::report::{write_plan_csv, write_plan_json};
use binplan::strategy::Strategy;
use binplan::verifier::verify_plan;
use std::fs;

#[test]
fn uniform_ten_bins_worked_example() {
    let p = plan(Strategy::Uniform, 10).unwrap();

    assert_eq!(p.delta_ids, vec![-5, -4, -3, -2, -1, 0, 1, 2, 3, 4]);

    // Y side: five full bins below plus half the active bin's weight.
    // Each full bin truncates to floor(1e30 / 5.5e12); the one-unit
    // truncation shortfall lands on the active bin.
    let full_y = 181_818_181_818_181_818u64;
    for i in 0..5 {
        assert_eq!(p.weight_y[i], full_y);
        assert_eq!(p.weight_x[i], 0);
    }
    assert_eq!(p.weight_y[5], 90_909_090_909_090_910);

    // X side: four full bins above plus half the active bin's weight.
    let full_x = 222_222_222_222_222_222u64;
    for i in 6..10 {
        assert_eq!(p.weight_x[i], full_x);
        assert_eq!(p.weight_y[i], 0);
    }
    assert_eq!(p.weight_x[5], 111_111_111_111_111_112);

    assert_eq!(p.weight_x.iter().sum::<u64>(), PRECISION);
    assert_eq!(p.weight_y.iter().sum::<u64>(), PRECISION);
}

#[test]
fn single_bin_splits_both_sides() {
    let p = plan(Strategy::Uniform, 1).unwrap();
    assert_eq!(p.delta_ids, vec![0]);
    assert_eq!(p.weight_x, vec![PRECISION]);
    assert_eq!(p.weight_y, vec![PRECISION]);
}

#[test]
fn non_positive_bin_counts_are_rejected() {
    assert_eq!(
        plan(Strategy::Uniform, 0),
        Err(PlanError::InvalidBinCount(0))
    );
    assert_eq!(
        plan(Strategy::BellCurve, -3),
        Err(PlanError::InvalidBinCount(-3))
    );
}

#[test]
fn unknown_strategy_name_is_rejected() {
    let err = "spiral".parse::<Strategy>().unwrap_err();
    assert_eq!(err, PlanError::InvalidStrategy("spiral".to_string()));
    assert_eq!("bell-curve".parse::<Strategy>(), Ok(Strategy::BellCurve));
}

#[test]
fn bell_curve_raw_shape_is_symmetric() {
    let w = Strategy::BellCurve.raw_weights(10);
    for i in 1..10 {
        assert_relative_eq!(w[i], w[10 - i], max_relative = 1e-12);
    }
}

#[test]
fn verifier_accepts_planned_output() {
    for strategy in [Strategy::Uniform, Strategy::BellCurve, Strategy::UShape] {
        let p = plan(strategy, 21).unwrap();
        let rep = verify_plan(&p, PRECISION).unwrap();
        assert_eq!(rep.bins, 21);
        assert_eq!(rep.active_index, 10);
        assert_eq!(rep.sum_x, PRECISION);
        assert_eq!(rep.sum_y, PRECISION);
        assert!(rep.contiguous_ok);
    }
}

#[test]
fn verifier_rejects_weight_on_wrong_side() {
    let mut p = plan(Strategy::Uniform, 4).unwrap();
    // Push base-side weight below the active price.
    p.weight_x[0] = 1;
    assert!(verify_plan(&p, PRECISION).is_err());
}

#[test]
fn plan_csv_has_one_header_and_expected_columns() {
    let out = "out_plan_shape_test";
    fs::create_dir_all(out).unwrap();
    let p = plan(Strategy::BellCurve, 5).unwrap();
    write_plan_csv(out, Strategy::BellCurve, &p, PRECISION).unwrap();

    let s = fs::read_to_string(format!("{out}/plan.csv")).unwrap();
    let header_count = s.lines().filter(|l| l.starts_with("delta_id,")).count();
    assert_eq!(header_count, 1, "CSV must have exactly one header row");

    let header_line = s.lines().find(|l| l.starts_with("delta_id,")).unwrap();
    assert_eq!(
        header_line,
        "delta_id,weight_x,weight_y,weight_x_pct,weight_y_pct"
    );

    let data_rows = s
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with("delta_id,"))
        .count();
    assert_eq!(data_rows, 5, "one data row per bin");

    let _ = fs::remove_dir_all(out);
}

#[test]
fn plan_json_round_trips() {
    let out = "out_plan_json_test";
    fs::create_dir_all(out).unwrap();
    let p = plan(Strategy::UShape, 8).unwrap();
    write_plan_json(out, &p).unwrap();

    let s = fs::read_to_string(format!("{out}/plan.json")).unwrap();
    let parsed: BinPlan = serde_json::from_str(&s).unwrap();
    assert_eq!(parsed, p);

    let _ = fs::remove_dir_all(out);
}
