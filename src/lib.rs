// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # inform-rs
//!
//! Discrete frequency distributions and information-theoretic measures
//! (active information, mutual information, transfer entropy) for integer
//! time series.
//!
//! ## Quick Start
//!
//! ```rust
//! use inform::Dist;
//! use inform::estimators::{GlobalValue, MutualInformation};
//! use ndarray::array;
//!
//! // Count tables: build a distribution from observations.
//! let dist = Dist::infer(&[0, 1, 1, 1]).unwrap();
//! assert_eq!(dist.counts(), &[1, 3]);
//! assert_eq!(dist.total(), 4);
//!
//! // Mutual information between two aligned series, in bits.
//! let xs = array![0, 0, 0, 0, 1, 1, 1, 1];
//! let ys = array![1, 1, 1, 1, 0, 0, 0, 0];
//! let mi = MutualInformation::new(&xs, &ys).unwrap().global_value();
//! assert!((mi - 1.0).abs() < 1e-10);
//! ```
//!
//! ## Architecture
//!
//! The crate has two layers:
//!
//! 1. **Distribution core** ([`dist`]): an owned, resizable table of
//!    non-negative counts over a zero-indexed support, with construction
//!    from raw counts, empirical observations, uniform priors, and
//!    tolerance-bounded approximation of real probability vectors.
//!    Ordinary misuse is signalled with sentinel returns, never panics.
//! 2. **Estimators** ([`estimators`]): measures over one or two integer
//!    series, each accumulating its count tables through the distribution
//!    core and exposing global and per-observation local values. The
//!    [`significance`] module wraps them in permutation tests.
//!
//! Estimator inputs are `ndarray::Array1<i32>` series over a zero-based
//! alphabet; alphabets are inferred from the data when not supplied.

pub mod dist;
pub mod errors;
pub mod estimators;
pub mod series;
pub mod significance;

pub use dist::Dist;
pub use errors::MeasureError;
pub use estimators::traits::{GlobalValue, LocalValues};
