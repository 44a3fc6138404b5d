// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Discrete frequency distributions over a finite, zero-indexed support.
//!
//! A [`Dist`] is an owned table of non-negative occurrence counts, one per
//! symbol, together with their cached sum. It is the count table every
//! estimator in this crate accumulates its observations into, and it exposes
//! the derived probability queries ([`Dist::prob`], [`Dist::dump`]) those
//! estimators read back out.
//!
//! Ordinary misuse is signalled with sentinels rather than panics:
//! constructors return `None` for unusable input, reads outside the support
//! return zero and writes outside the support are no-ops. Callers can branch
//! on the result without any unwinding machinery.

use log::warn;

/// Largest denominator [`Dist::approximate`] will try before giving up.
///
/// Keeps the search terminating on inputs that have no small rational
/// reconstruction (e.g. irrational probability vectors with a tight
/// tolerance).
const MAX_APPROX_DENOM: u64 = 1 << 20;

/// A frequency distribution over the support `0..len`.
///
/// The distribution is *valid* once it has a non-empty support and at least
/// one recorded observation; probability queries are only meaningful on a
/// valid distribution. Validity is always derived from the current counts,
/// never stored.
#[derive(Debug, PartialEq, Eq)]
pub struct Dist {
    counts: Vec<u64>,
    total: u64,
}

impl Clone for Dist {
    fn clone(&self) -> Self {
        Dist {
            counts: self.counts.clone(),
            total: self.total,
        }
    }

    /// Overwrite `self` with `source`'s counts, reusing the existing
    /// allocation when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.counts.clone_from(&source.counts);
        self.total = source.total;
    }
}

impl Dist {
    /// Create a distribution with support size `n` and all counts zero.
    ///
    /// Returns `None` when `n == 0`. The result is not yet valid: no
    /// observations have been recorded.
    pub fn new(n: usize) -> Option<Self> {
        (n > 0).then(|| Dist {
            counts: vec![0; n],
            total: 0,
        })
    }

    /// Create a distribution from a sequence of raw counts, copied verbatim.
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_counts(counts: &[u64]) -> Option<Self> {
        if counts.is_empty() {
            return None;
        }
        Some(Dist {
            counts: counts.to_vec(),
            total: counts.iter().sum(),
        })
    }

    /// Infer a distribution from empirical observations.
    ///
    /// Each observation is an index into an initially unknown support; the
    /// inferred support size is the largest observed value plus one, so
    /// unseen trailing symbols are never materialized. Returns `None` when
    /// the sequence is empty or contains a negative observation.
    pub fn infer(observations: &[i32]) -> Option<Self> {
        let max = *observations.iter().max()?;
        if observations.iter().any(|&v| v < 0) {
            return None;
        }
        let mut dist = Dist::new(max as usize + 1)?;
        dist.accumulate(observations);
        Some(dist)
    }

    /// Create a uniform distribution: `n` symbols, each observed once.
    ///
    /// Returns `None` when `n == 0`.
    pub fn uniform(n: usize) -> Option<Self> {
        (n > 0).then(|| Dist {
            counts: vec![1; n],
            total: n as u64,
        })
    }

    /// Reconstruct integer counts whose empirical frequencies reproduce the
    /// given probabilities to within an absolute `tolerance`.
    ///
    /// The search tries denominators in increasing order, floor-scaling the
    /// probabilities at each candidate, and accepts the first denominator for
    /// which every symbol's frequency lands within the tolerance. Smaller
    /// representations therefore always win; the accepted total is the sum of
    /// the floored counts, which may fall short of the denominator itself.
    ///
    /// Returns `None` when fewer than two probabilities are given, when any
    /// entry is negative or non-finite, or when no denominator up to the
    /// internal search bound satisfies the tolerance for all entries.
    pub fn approximate(probs: &[f64], tolerance: f64) -> Option<Self> {
        if probs.len() < 2 || probs.iter().any(|&p| !p.is_finite() || p < 0.0) {
            return None;
        }
        let mut counts = vec![0u64; probs.len()];
        for denom in 1..=MAX_APPROX_DENOM {
            let mut total = 0u64;
            for (count, &p) in counts.iter_mut().zip(probs) {
                *count = (p * denom as f64).floor() as u64;
                total += *count;
            }
            if total == 0 {
                continue;
            }
            let within = counts
                .iter()
                .zip(probs)
                .all(|(&c, &p)| (c as f64 / total as f64 - p).abs() <= tolerance);
            if within {
                return Some(Dist { counts, total });
            }
        }
        warn!(
            "no denominator up to {MAX_APPROX_DENOM} reproduces {} probabilities within {tolerance:e}",
            probs.len()
        );
        None
    }

    /// Support size of the distribution.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the support is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of recorded observations.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// A distribution is valid once it has a non-empty support and at least
    /// one observation.
    pub fn is_valid(&self) -> bool {
        !self.counts.is_empty() && self.total > 0
    }

    /// Borrow the raw count table.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Count recorded for symbol `i`; zero outside the support.
    pub fn get(&self, i: usize) -> u64 {
        self.counts.get(i).copied().unwrap_or(0)
    }

    /// Overwrite the count for symbol `i` and return the new total.
    ///
    /// Writes outside the support are no-ops returning zero.
    pub fn set(&mut self, i: usize, value: u64) -> u64 {
        match self.counts.get_mut(i) {
            Some(count) => {
                self.total = self.total - *count + value;
                *count = value;
                self.total
            }
            None => 0,
        }
    }

    /// Record one observation of symbol `i` and return its new count.
    ///
    /// This is the primitive increment behind [`Dist::infer`] and
    /// [`Dist::accumulate`]. Out-of-support ticks are no-ops returning zero.
    pub fn tick(&mut self, i: usize) -> u64 {
        match self.counts.get_mut(i) {
            Some(count) => {
                *count += 1;
                self.total += 1;
                *count
            }
            None => 0,
        }
    }

    /// Record a batch of observations, skipping any that fall outside the
    /// support (negative or too large). Returns the number actually applied.
    pub fn accumulate(&mut self, observations: &[i32]) -> usize {
        let mut applied = 0;
        for &v in observations {
            if v >= 0 && (v as usize) < self.counts.len() {
                self.tick(v as usize);
                applied += 1;
            }
        }
        applied
    }

    /// Empirical probability of symbol `i`.
    ///
    /// The caller must ensure the distribution [`is_valid`](Dist::is_valid);
    /// querying an invalid distribution is a caller-side programming error.
    pub fn prob(&self, i: usize) -> f64 {
        debug_assert!(self.is_valid(), "probability query on invalid distribution");
        self.get(i) as f64 / self.total as f64
    }

    /// Write every symbol's probability into `out`.
    ///
    /// `out` must have exactly the support size; on any mismatch (or on an
    /// invalid distribution) nothing is written and zero is returned.
    /// Returns the support size on success.
    pub fn dump(&self, out: &mut [f64]) -> usize {
        if out.len() != self.counts.len() || !self.is_valid() {
            return 0;
        }
        let total = self.total as f64;
        for (slot, &count) in out.iter_mut().zip(&self.counts) {
            *slot = count as f64 / total;
        }
        self.counts.len()
    }

    /// Grow or shrink the support in place.
    ///
    /// The first `min(old, new)` counts are preserved; new symbols start at
    /// zero, so growth never changes the total, while shrinking drops the
    /// suffix and its observations. Any previously borrowed view of the
    /// counts is invalidated by the mutable borrow.
    pub fn resize(&mut self, n: usize) {
        self.counts.resize(n, 0);
        self.total = self.counts.iter().sum();
    }
}
