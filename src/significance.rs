// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Permutation-test significance for the information measures.
//!
//! Each routine computes its measure on the given data, then re-computes it
//! `nperm` times on data whose informational coupling has been destroyed by
//! shuffling (the second series for mutual information, the source series
//! for transfer entropy, the series itself for active information). The
//! fraction of permuted values at least as large as the observed one yields
//! a two-sided p-value with a binomial standard error.

use ndarray::Array1;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::errors::MeasureError;
use crate::estimators::traits::GlobalValue;
use crate::estimators::{ActiveInformation, MutualInformation, TransferEntropy};

/// Fewer permutations than this give a p-value estimate too coarse to act on.
const MIN_PERMUTATIONS: usize = 10;

/// The statistical significance of a computed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sig {
    /// A two-sided p-value.
    pub p: f64,
    /// The standard error of the p-value.
    pub se: f64,
}

/// A computed measure together with its statistical significance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigValue {
    pub value: f64,
    pub sig: Sig,
}

fn check_nperm(nperm: usize) -> Result<(), MeasureError> {
    if nperm < MIN_PERMUTATIONS {
        return Err(MeasureError::TooFewPermutations(nperm));
    }
    Ok(())
}

/// The permuted values start from a count of one: the observed value is
/// itself a member of the null ensemble.
fn significance(exceedances: usize, nperm: usize) -> Sig {
    let p = (1 + exceedances) as f64 / (nperm + 1) as f64;
    let se = (p * (1.0 - p) / nperm as f64).sqrt();
    Sig { p, se }
}

/// Mutual information between `xs` and `ys` with permutation-test
/// significance, shuffling `ys`.
pub fn mutual_info<R: Rng + ?Sized>(
    xs: &Array1<i32>,
    ys: &Array1<i32>,
    nperm: usize,
    rng: &mut R,
) -> Result<SigValue, MeasureError> {
    check_nperm(nperm)?;
    let value = MutualInformation::new(xs, ys)?.global_value();

    let mut permuted = ys.to_vec();
    let mut exceedances = 0;
    for _ in 0..nperm {
        permuted.shuffle(rng);
        let shuffled = Array1::from(permuted.clone());
        if MutualInformation::new(xs, &shuffled)?.global_value() >= value {
            exceedances += 1;
        }
    }
    Ok(SigValue {
        value,
        sig: significance(exceedances, nperm),
    })
}

/// Active information of `series` with permutation-test significance,
/// shuffling the series itself.
pub fn active_info<R: Rng + ?Sized>(
    series: &Array1<i32>,
    k: usize,
    nperm: usize,
    rng: &mut R,
) -> Result<SigValue, MeasureError> {
    check_nperm(nperm)?;
    let value = ActiveInformation::new(series, k)?.global_value();

    let mut permuted = series.to_vec();
    let mut exceedances = 0;
    for _ in 0..nperm {
        permuted.shuffle(rng);
        let shuffled = Array1::from(permuted.clone());
        if ActiveInformation::new(&shuffled, k)?.global_value() >= value {
            exceedances += 1;
        }
    }
    Ok(SigValue {
        value,
        sig: significance(exceedances, nperm),
    })
}

/// Transfer entropy from `source` to `target` with permutation-test
/// significance, shuffling the source.
pub fn transfer_entropy<R: Rng + ?Sized>(
    source: &Array1<i32>,
    target: &Array1<i32>,
    k: usize,
    nperm: usize,
    rng: &mut R,
) -> Result<SigValue, MeasureError> {
    check_nperm(nperm)?;
    let value = TransferEntropy::new(source, target, k)?.global_value();

    let mut permuted = source.to_vec();
    let mut exceedances = 0;
    for _ in 0..nperm {
        permuted.shuffle(rng);
        let shuffled = Array1::from(permuted.clone());
        if TransferEntropy::new(&shuffled, target, k)?.global_value() >= value {
            exceedances += 1;
        }
    }
    Ok(SigValue {
        value,
        sig: significance(exceedances, nperm),
    })
}
