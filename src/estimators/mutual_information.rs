// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::dist::Dist;
use crate::errors::MeasureError;
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::series;

/// Bivariate mutual information between two aligned time series.
///
/// I(X; Y) = Σ p(x, y) log2( p(x, y) / (p(x) p(y)) )
///
/// summed over the joint alphabet, in bits. Marginal and joint counts are
/// accumulated into distributions over `base_x`, `base_y` and
/// `base_x * base_y` symbols respectively.
#[derive(Debug)]
pub struct MutualInformation {
    /// Joint counts, indexed by `x * base_y + y`.
    joint: Dist,
    xs: Dist,
    ys: Dist,
    /// Per-sample joint codes, for local values.
    joint_codes: Vec<usize>,
    base_y: usize,
}

impl MutualInformation {
    /// Build the estimator with both bases inferred from the data.
    pub fn new(xs: &Array1<i32>, ys: &Array1<i32>) -> Result<Self, MeasureError> {
        let base_x = series::infer_base(xs.view());
        let base_y = series::infer_base(ys.view());
        Self::with_bases(xs, ys, base_x, base_y)
    }

    /// Build the estimator over explicit per-series alphabets.
    ///
    /// The series must be non-empty, of equal length, with every state in
    /// the respective alphabet.
    pub fn with_bases(
        xs: &Array1<i32>,
        ys: &Array1<i32>,
        base_x: i32,
        base_y: i32,
    ) -> Result<Self, MeasureError> {
        if xs.len() != ys.len() {
            return Err(MeasureError::LengthMismatch);
        }
        series::validate(xs.view(), base_x)?;
        series::validate(ys.view(), base_y)?;

        let bx = base_x as usize;
        let by = base_y as usize;
        let joint_len = bx.checked_mul(by).ok_or(MeasureError::StateSpaceTooLarge)?;

        let mut joint = Dist::new(joint_len).expect("state space is non-empty");
        let mut x_dist = Dist::new(bx).expect("state space is non-empty");
        let mut y_dist = Dist::new(by).expect("state space is non-empty");

        let mut joint_codes = Vec::with_capacity(xs.len());
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            let code = x as usize * by + y as usize;
            joint.tick(code);
            x_dist.tick(x as usize);
            y_dist.tick(y as usize);
            joint_codes.push(code);
        }

        Ok(Self {
            joint,
            xs: x_dist,
            ys: y_dist,
            joint_codes,
            base_y: by,
        })
    }

    /// Pointwise mutual information of one (x, y) pair, in bits.
    fn pointwise(&self, code: usize) -> f64 {
        let n = self.joint.total() as f64;
        let joint = self.joint.get(code) as f64;
        let x = self.xs.get(code / self.base_y) as f64;
        let y = self.ys.get(code % self.base_y) as f64;
        ((joint * n) / (x * y)).log2()
    }
}

impl GlobalValue for MutualInformation {
    fn global_value(&self) -> f64 {
        let n = self.joint.total() as f64;
        let mut mi = 0.0;
        for code in 0..self.joint.len() {
            let count = self.joint.get(code);
            if count == 0 {
                continue;
            }
            mi += (count as f64 / n) * self.pointwise(code);
        }
        mi
    }
}

impl LocalValues for MutualInformation {
    fn local_values(&self) -> Array1<f64> {
        self.joint_codes.iter().map(|&c| self.pointwise(c)).collect()
    }
}
