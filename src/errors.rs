// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain errors reported by the estimator and significance layers.
//!
//! The distribution core never produces these: it signals ordinary misuse
//! with sentinel returns (see [`crate::dist`]). Estimator entry points are
//! the boundary where invalid series, bases and history lengths turn into a
//! distinguishable error kind with a human-readable message, suitable for a
//! host binding to forward verbatim.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("time series is empty")]
    EmptySeries,

    #[error("time series have different lengths")]
    LengthMismatch,

    #[error("time series has negative states")]
    NegativeState,

    #[error("state {state} does not fit in base {base}")]
    StateOutOfBase { state: i32, base: i32 },

    #[error("base is too small; at least 2 symbols are required, got {0}")]
    BadBase(i32),

    #[error("history length must be at least 1")]
    ZeroHistoryLength,

    #[error("history length {k} is too long for a time series of length {len}")]
    HistoryTooLong { k: usize, len: usize },

    #[error("state space is too large to allocate")]
    StateSpaceTooLarge,

    #[error("too few permutations; got {0}, need at least 10")]
    TooFewPermutations(usize),
}
