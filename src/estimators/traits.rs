// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

pub trait LocalValues: GlobalValue {
    /// Compute and return the per-observation local values of the measure.
    ///
    /// Each observation contributes one pointwise information term; the
    /// global value equals the mean of the local values.
    fn local_values(&self) -> Array1<f64>;

    /// Derive the global value as the mean of the local values.
    fn global_from_local(&self) -> f64 {
        let local_vals = self.local_values();
        local_vals.mean().expect("local values should not be empty")
    }
}
