// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::dist::Dist;
use crate::errors::MeasureError;
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::series;

/// Active information storage of a time series.
///
/// Active information measures how much of the next state of a series is
/// predicted by its own length-`k` history:
///
/// A(k) = Σ p(h, s) log2( p(h, s) / (p(h) p(s)) )
///
/// summed over all observed (history, next state) pairs. It is the mutual
/// information between the series' past `k` states and its next state,
/// reported in bits.
#[derive(Debug)]
pub struct ActiveInformation {
    /// Joint (history, next state) counts, indexed by `history * base + next`.
    states: Dist,
    /// Length-`k` history counts.
    histories: Dist,
    /// Next-state counts.
    futures: Dist,
    /// Per-timestep state codes, for local values.
    state_codes: Vec<usize>,
    base: usize,
}

impl ActiveInformation {
    /// Build the estimator with the base inferred from the series.
    pub fn new(series: &Array1<i32>, k: usize) -> Result<Self, MeasureError> {
        let base = series::infer_base(series.view());
        Self::with_base(series, base, k)
    }

    /// Build the estimator over an explicit `base`-symbol alphabet.
    ///
    /// Requires a non-empty series with all states in `0..base`, `k >= 1`,
    /// and a series long enough to observe at least one history/next-state
    /// pair (`len > k`).
    pub fn with_base(data: &Array1<i32>, base: i32, k: usize) -> Result<Self, MeasureError> {
        series::validate(data.view(), base)?;
        series::validate_history(k, data.len())?;

        let b = base as usize;
        let histories_len = series::state_space(b, k as u32)?;
        let states_len = histories_len
            .checked_mul(b)
            .ok_or(MeasureError::StateSpaceTooLarge)?;

        let mut states = Dist::new(states_len).expect("state space is non-empty");
        let mut histories = Dist::new(histories_len).expect("state space is non-empty");
        let mut futures = Dist::new(b).expect("state space is non-empty");

        let m = data.len();
        let mut history = 0usize;
        for i in 0..k {
            history = history * b + data[i] as usize;
        }

        let mut state_codes = Vec::with_capacity(m - k);
        for i in k..m {
            let future = data[i] as usize;
            let state = history * b + future;
            states.tick(state);
            histories.tick(history);
            futures.tick(future);
            state_codes.push(state);
            // Slide the window: drop the oldest symbol, append the future.
            history = state - data[i - k] as usize * histories_len;
        }

        Ok(Self {
            states,
            histories,
            futures,
            state_codes,
            base: b,
        })
    }

    /// Pointwise information of one (history, next state) pair, in bits.
    fn pointwise(&self, state: usize) -> f64 {
        let n = self.states.total() as f64;
        let joint = self.states.get(state) as f64;
        let history = self.histories.get(state / self.base) as f64;
        let future = self.futures.get(state % self.base) as f64;
        ((joint * n) / (history * future)).log2()
    }
}

impl GlobalValue for ActiveInformation {
    fn global_value(&self) -> f64 {
        let n = self.states.total() as f64;
        let mut ai = 0.0;
        for state in 0..self.states.len() {
            let count = self.states.get(state);
            if count == 0 {
                continue;
            }
            ai += (count as f64 / n) * self.pointwise(state);
        }
        ai
    }
}

impl LocalValues for ActiveInformation {
    fn local_values(&self) -> Array1<f64> {
        self.state_codes.iter().map(|&s| self.pointwise(s)).collect()
    }
}
