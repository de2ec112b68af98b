// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP surface of the vouch admission webhook.
//!
//! The binary wires the ECR registry adapter and the rollout scaler into
//! an [`vouch_admission_core::AdmissionEngine`] and serves the
//! AdmissionReview protocol on `/validate`. Everything interesting
//! happens in the core crate; this one only translates the wire envelope.

pub mod api;
pub mod review;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
