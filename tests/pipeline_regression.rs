//! Pipeline Regression Tests
//!
//! End-to-end checks of the estimation pipeline through the public library
//! surface: acceptance at range boundaries, rejection just outside them,
//! determinism of the surrogate, and the batch accounting guarantees.

use slope_fos::surrogate::weights::{FOS_RANGE, INPUT_RANGES};
use slope_fos::{
    estimate_batch, estimate_parameters, estimate_single, BatchLayout, EstimationResult,
    ParameterSet, RecordError,
};

// ============================================================================
// Single Estimation
// ============================================================================

#[test]
fn reference_inputs_reproduce_fixture_value() {
    let result = estimate_single(["1000", "40", "24", "0.10"]);
    assert_eq!(result.to_string(), "1.814");
}

#[test]
fn interior_inputs_stay_within_output_range() {
    let cases = [
        ["1000", "40", "24", "0.10"],
        ["900", "45", "23.5", "0.05"],
        ["1100", "38.5", "25", "0.15"],
        ["950", "42", "24.5", "0.12"],
        ["850", "36", "22.5", "0.0"],
    ];
    for fields in cases {
        let result = estimate_single(fields);
        let fos = result.fos().unwrap_or_else(|| panic!("rejected: {fields:?}"));
        assert!(
            FOS_RANGE.contains(fos),
            "FOS {fos} outside output range for {fields:?}"
        );
    }
}

#[test]
fn boundary_inputs_are_accepted() {
    assert!(estimate_single(["809.77", "40", "24", "0.10"]).is_success());
    assert!(estimate_single(["1195.17", "40", "24", "0.10"]).is_success());
    assert!(estimate_single(["1000", "35.18", "24", "0.10"]).is_success());
    assert!(estimate_single(["1000", "49.40", "24", "0.10"]).is_success());
    assert!(estimate_single(["1000", "40", "22.02", "0.10"]).is_success());
    assert!(estimate_single(["1000", "40", "25.99", "0.10"]).is_success());
    assert!(estimate_single(["1000", "40", "24", "0"]).is_success());
    assert!(estimate_single(["1000", "40", "24", "0.20"]).is_success());
}

#[test]
fn inputs_outside_any_boundary_are_rejected() {
    for fields in [
        ["809.76", "40", "24", "0.10"],
        ["1000", "49.41", "24", "0.10"],
        ["1000", "40", "26.00", "0.10"],
        ["1000", "40", "24", "-0.01"],
        ["1000", "40", "24", "0.21"],
    ] {
        let result = estimate_single(fields);
        assert!(result.fos().is_none(), "accepted out-of-range {fields:?}");
        assert!(
            result
                .to_string()
                .starts_with("use valid range for input values"),
            "unexpected diagnostic for {fields:?}: {result}"
        );
    }
}

#[test]
fn evaluation_is_deterministic_across_calls() {
    let params = ParameterSet::new(987.65, 43.21, 24.68, 0.13);
    let first = estimate_parameters(&params);
    let second = estimate_parameters(&params);
    match (first, second) {
        (EstimationResult::Success { fos: a }, EstimationResult::Success { fos: b }) => {
            assert_eq!(a.to_bits(), b.to_bits());
        }
        other => panic!("expected two successes, got {other:?}"),
    }
}

#[test]
fn boundary_normalization_round_trips() {
    // Denormalizing the normalized value of any boundary input recovers the
    // boundary to within 1e-9.
    use slope_fos::surrogate::normalize;
    for range in &INPUT_RANGES {
        for value in [range.min, range.max] {
            let n = normalize(value, range);
            let back = ((n + 1.0) / 2.0) * (range.max - range.min) + range.min;
            assert!((back - value).abs() < 1e-9);
        }
    }
}

// ============================================================================
// Batch Estimation
// ============================================================================

#[test]
fn batch_yields_one_result_per_record_in_order() {
    let text = "\
1000 40 24 0.10
900 45 23.5 0.05
not a number at all
1100 38.5 25 0.15
1000 40 24
";
    let results: Vec<_> = estimate_batch(text, BatchLayout::OnePerLine).collect();

    assert_eq!(results.len(), 5);
    let failed = results.iter().filter(|r| !r.is_success()).count();
    assert_eq!(failed, 2);

    assert_eq!(results[0].to_string(), "1.814");
    assert_eq!(results[1].to_string(), "2.224");
    assert!(!results[2].is_success());
    assert_eq!(results[3].to_string(), "1.617");
    assert_eq!(
        results[4].error(),
        Some(&RecordError::Malformed {
            expected: 4,
            got: 3
        })
    );
}

#[test]
fn batch_failure_does_not_abort_following_records() {
    let text = "oops\n1000 40 24 0.10\n";
    let results: Vec<_> = estimate_batch(text, BatchLayout::OnePerLine).collect();
    assert_eq!(results.len(), 2);
    assert!(!results[0].is_success());
    assert_eq!(results[1].to_string(), "1.814");
}

#[test]
fn four_line_legacy_layout_matches_per_line_layout() {
    let per_line = "1000 40 24 0.10\n950 42 24.5 0.12\n";
    let four_line = "1000\n40\n24\n0.10\n950\n42\n24.5\n0.12\n";

    let a: Vec<_> = estimate_batch(per_line, BatchLayout::OnePerLine).collect();
    let b: Vec<_> = estimate_batch(four_line, BatchLayout::FourLines).collect();
    assert_eq!(a, b);
}
