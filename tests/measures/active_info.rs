// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use inform::MeasureError;
use inform::estimators::{ActiveInformation, GlobalValue, LocalValues};
use ndarray::{Array1, array};
use rstest::rstest;

#[rstest]
#[case(vec![1, 1, 0, 0, 1, 0, 0, 1], 2, 0.918296)]
#[case(vec![1, 1, 0, 0, 1, 0, 0, 1], 3, 0.970951)]
#[case(vec![1, 0, 0, 0, 0, 0, 0, 0, 0], 2, 0.0)]
#[case(vec![1, 0, 0, 0, 0, 0, 0, 0, 0], 3, 0.0)]
#[case(vec![0, 0, 1, 1, 1, 1, 0, 0, 0], 2, 0.305958)]
#[case(vec![0, 0, 1, 1, 1, 1, 0, 0, 0], 3, 0.666667)]
#[case(vec![1, 0, 0, 0, 0, 0, 0, 1, 1], 2, 0.347458)]
#[case(vec![1, 0, 0, 0, 0, 0, 0, 1, 1], 3, 0.377444)]
#[case(vec![0, 0, 0, 0, 0, 1, 1, 0, 0], 2, 0.399533)]
#[case(vec![0, 0, 0, 0, 0, 1, 1, 0, 0], 3, 0.459148)]
#[case(vec![0, 0, 0, 0, 1, 1, 0, 0, 0], 2, 0.399533)]
#[case(vec![0, 0, 0, 0, 1, 1, 0, 0, 0], 3, 0.584963)]
#[case(vec![1, 1, 1, 0, 0, 0, 0, 1, 1], 2, 0.305958)]
#[case(vec![1, 1, 1, 0, 0, 0, 0, 1, 1], 3, 0.584963)]
#[case(vec![3, 3, 3, 2, 1, 0, 0, 0, 1], 2, 1.270942)]
#[case(vec![3, 3, 3, 2, 1, 0, 0, 0, 1], 3, 1.459148)]
#[case(vec![2, 2, 3, 3, 3, 3, 2, 1, 0], 2, 1.270942)]
#[case(vec![2, 2, 3, 3, 3, 3, 2, 1, 0], 3, 1.459148)]
#[case(vec![2, 2, 2, 2, 2, 2, 1, 1, 1], 2, 0.469565)]
#[case(vec![2, 2, 2, 2, 2, 2, 1, 1, 1], 3, 0.459148)]
fn known_values(#[case] series: Vec<i32>, #[case] k: usize, #[case] expected: f64) {
    let series = Array1::from(series);
    let ai = ActiveInformation::new(&series, k).unwrap().global_value();
    assert_abs_diff_eq!(ai, expected, epsilon = 1e-6);
}

#[test]
fn short_example() {
    let series = array![1, 1, 0, 0, 1];
    let ai = ActiveInformation::new(&series, 2).unwrap().global_value();
    assert_abs_diff_eq!(ai, 0.918296, epsilon = 1e-6);
}

#[test]
fn global_value_is_mean_of_locals() {
    let series = array![3, 3, 3, 2, 1, 0, 0, 0, 1];
    let est = ActiveInformation::new(&series, 2).unwrap();
    let locals = est.local_values();
    assert_eq!(locals.len(), series.len() - 2);
    assert_abs_diff_eq!(est.global_value(), est.global_from_local(), epsilon = 1e-12);
}

#[test]
fn rejects_empty_series() {
    let empty = Array1::<i32>::zeros(0);
    assert_eq!(
        ActiveInformation::new(&empty, 2).unwrap_err(),
        MeasureError::EmptySeries
    );
}

#[test]
fn rejects_negative_states() {
    let series = array![-1, 0, 0];
    assert_eq!(
        ActiveInformation::new(&series, 2).unwrap_err(),
        MeasureError::NegativeState
    );
}

#[rstest]
#[case(vec![0, 0], 2)]
#[case(vec![0, 0], 3)]
#[case(vec![0, 0, 0, 0], 4)]
#[case(vec![0, 0, 0, 0], 5)]
fn rejects_history_longer_than_series(#[case] series: Vec<i32>, #[case] k: usize) {
    let series = Array1::from(series);
    assert_eq!(
        ActiveInformation::new(&series, k).unwrap_err(),
        MeasureError::HistoryTooLong {
            k,
            len: series.len()
        }
    );
}

#[test]
fn oversized_state_space_is_a_domain_error() {
    // base^k = 2^64 does not fit a count table.
    let series = Array1::<i32>::zeros(80);
    assert_eq!(
        ActiveInformation::new(&series, 64).unwrap_err(),
        MeasureError::StateSpaceTooLarge
    );
}

#[test]
fn rejects_zero_history_length() {
    let series = array![0, 1, 0];
    assert_eq!(
        ActiveInformation::new(&series, 0).unwrap_err(),
        MeasureError::ZeroHistoryLength
    );
}

#[test]
fn rejects_states_outside_an_explicit_base() {
    let series = array![0, 2, 1, 0, 1];
    assert_eq!(
        ActiveInformation::with_base(&series, 2, 2).unwrap_err(),
        MeasureError::StateOutOfBase { state: 2, base: 2 }
    );
    assert_eq!(
        ActiveInformation::with_base(&series, 1, 2).unwrap_err(),
        MeasureError::BadBase(1)
    );
}

#[test]
fn wider_explicit_base_does_not_change_the_value() {
    let series = array![1, 1, 0, 0, 1, 0, 0, 1];
    let inferred = ActiveInformation::new(&series, 2).unwrap().global_value();
    let widened = ActiveInformation::with_base(&series, 3, 2)
        .unwrap()
        .global_value();
    assert_abs_diff_eq!(inferred, widened, epsilon = 1e-12);
}
