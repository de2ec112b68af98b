// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Kube-backed [`WorkloadScaler`] implementation for Argo Rollouts.

pub mod scale;

pub use scale::{RolloutApi, RolloutScaler};
