// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Information measures over discrete integer time series.
//!
//! Each estimator validates its inputs once at construction, accumulates the
//! count tables it needs into [`crate::dist::Dist`] instances, and then
//! serves the global measure ([`GlobalValue`]) and its per-observation
//! decomposition ([`LocalValues`]) from those tables.

pub mod active_information;
pub mod mutual_information;
pub mod traits;
pub mod transfer_entropy;

pub use active_information::ActiveInformation;
pub use mutual_information::MutualInformation;
pub use traits::{GlobalValue, LocalValues};
pub use transfer_entropy::TransferEntropy;
