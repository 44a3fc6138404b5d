// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integer time series validation and alphabet inference.
//!
//! Estimators consume densely packed `Array1<i32>` series whose states are
//! drawn from the zero-based alphabet `0..base`. When a caller does not
//! supply the base explicitly it is inferred from the data.

use ndarray::ArrayView1;

use crate::errors::MeasureError;

/// Smallest alphabet any measure is defined over.
pub const MIN_BASE: i32 = 2;

/// Infer the alphabet size of a series: one plus its largest state, but
/// never less than [`MIN_BASE`] so constant series still have a two-symbol
/// alphabet.
pub fn infer_base(series: ArrayView1<i32>) -> i32 {
    series.iter().fold(MIN_BASE, |base, &v| base.max(v + 1))
}

/// Check that a series is non-empty and that every state fits the alphabet.
pub fn validate(series: ArrayView1<i32>, base: i32) -> Result<(), MeasureError> {
    if series.is_empty() {
        return Err(MeasureError::EmptySeries);
    }
    if base < MIN_BASE {
        return Err(MeasureError::BadBase(base));
    }
    for &state in series {
        if state < 0 {
            return Err(MeasureError::NegativeState);
        }
        if state >= base {
            return Err(MeasureError::StateOutOfBase { state, base });
        }
    }
    Ok(())
}

/// Number of distinct words of length `width` over a `base`-symbol alphabet,
/// i.e. the size of the count table indexed by such words.
pub(crate) fn state_space(base: usize, width: u32) -> Result<usize, MeasureError> {
    base.checked_pow(width)
        .ok_or(MeasureError::StateSpaceTooLarge)
}

/// Check a history length against a series length: at least one observation
/// of a length-`k` history plus its successor must fit.
pub(crate) fn validate_history(k: usize, len: usize) -> Result<(), MeasureError> {
    if k == 0 {
        return Err(MeasureError::ZeroHistoryLength);
    }
    if len <= k {
        return Err(MeasureError::HistoryTooLong { k, len });
    }
    Ok(())
}
