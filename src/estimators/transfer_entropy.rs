// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::dist::Dist;
use crate::errors::MeasureError;
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::series;

/// Transfer entropy from a source series to a target series.
///
/// Transfer entropy quantifies the information the source's previous state
/// provides about the target's next state, over and above the target's own
/// length-`k` history:
///
/// T(k) = Σ p(h, t, s) log2( p(h, t, s) p(h) / (p(h, s) p(h, t)) )
///
/// where `h` is the target history, `t` the target's next state and `s` the
/// source's preceding state. Both series share a common alphabet: the larger
/// of the two inferred (or supplied) bases.
#[derive(Debug)]
pub struct TransferEntropy {
    /// Full (history, target next, source prev) counts,
    /// indexed by `(history * base + next) * base + source`.
    states: Dist,
    /// Target history counts.
    histories: Dist,
    /// (history, source prev) counts.
    sources: Dist,
    /// (history, target next) counts.
    predicates: Dist,
    /// Per-timestep state codes, for local values.
    state_codes: Vec<usize>,
    base: usize,
}

impl TransferEntropy {
    /// Build the estimator with the common base inferred from both series.
    pub fn new(source: &Array1<i32>, target: &Array1<i32>, k: usize) -> Result<Self, MeasureError> {
        let base = series::infer_base(source.view()).max(series::infer_base(target.view()));
        Self::with_base(source, target, base, k)
    }

    /// Build the estimator over an explicit shared `base`-symbol alphabet.
    ///
    /// Requires non-empty series of equal length with all states in
    /// `0..base`, `k >= 1`, and `len > k`.
    pub fn with_base(
        source: &Array1<i32>,
        target: &Array1<i32>,
        base: i32,
        k: usize,
    ) -> Result<Self, MeasureError> {
        if source.len() != target.len() {
            return Err(MeasureError::LengthMismatch);
        }
        series::validate(source.view(), base)?;
        series::validate(target.view(), base)?;
        series::validate_history(k, target.len())?;

        let b = base as usize;
        let histories_len = series::state_space(b, k as u32)?;
        let predicates_len = histories_len
            .checked_mul(b)
            .ok_or(MeasureError::StateSpaceTooLarge)?;
        let states_len = predicates_len
            .checked_mul(b)
            .ok_or(MeasureError::StateSpaceTooLarge)?;

        let mut states = Dist::new(states_len).expect("state space is non-empty");
        let mut histories = Dist::new(histories_len).expect("state space is non-empty");
        let mut sources = Dist::new(predicates_len).expect("state space is non-empty");
        let mut predicates = Dist::new(predicates_len).expect("state space is non-empty");

        let m = target.len();
        let mut history = 0usize;
        for i in 0..k {
            history = history * b + target[i] as usize;
        }

        let mut state_codes = Vec::with_capacity(m - k);
        for i in k..m {
            let future = target[i] as usize;
            let src = source[i - 1] as usize;
            let predicate = history * b + future;
            let state = predicate * b + src;
            states.tick(state);
            histories.tick(history);
            sources.tick(history * b + src);
            predicates.tick(predicate);
            state_codes.push(state);
            // Slide the target history window.
            history = predicate - target[i - k] as usize * histories_len;
        }

        Ok(Self {
            states,
            histories,
            sources,
            predicates,
            state_codes,
            base: b,
        })
    }

    /// Pointwise transfer entropy of one (history, next, source) triple.
    fn pointwise(&self, state: usize) -> f64 {
        let b = self.base;
        let src = state % b;
        let predicate = state / b;
        let history = predicate / b;

        let joint = self.states.get(state) as f64;
        let hist = self.histories.get(history) as f64;
        let source = self.sources.get(history * b + src) as f64;
        let pred = self.predicates.get(predicate) as f64;
        ((joint * hist) / (source * pred)).log2()
    }
}

impl GlobalValue for TransferEntropy {
    fn global_value(&self) -> f64 {
        let n = self.states.total() as f64;
        let mut te = 0.0;
        for state in 0..self.states.len() {
            let count = self.states.get(state);
            if count == 0 {
                continue;
            }
            te += (count as f64 / n) * self.pointwise(state);
        }
        te
    }
}

impl LocalValues for TransferEntropy {
    fn local_values(&self) -> Array1<f64> {
        self.state_codes.iter().map(|&s| self.pointwise(s)).collect()
    }
}
