// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Admission decision core for the vouch webhook.
//!
//! This crate holds the pure decision logic: parsing container image
//! references, collecting them from a pod, inferring the owning Argo
//! Rollout from pod labels, and the engine that turns registry lookups
//! into an allow/deny verdict with at-most-once scale-to-zero
//! remediation on denial.
//!
//! The registry and cluster clients live behind the [`ImageRegistry`] and
//! [`WorkloadScaler`] traits so the engine can be exercised with the
//! in-crate mocks; the concrete adapters are separate crates.

pub mod engine;
pub mod image;
pub mod ownership;
pub mod pod;
pub mod registry;
pub mod scaler;

pub use engine::{AdmissionEngine, Verdict, ALLOWED_MESSAGE, DENIED_MESSAGE};
pub use image::ImageReference;
pub use ownership::{resolve_rollout_target, RemediationTarget};
pub use pod::{ContainerSpec, PodAdmissionSubject};
pub use registry::{ImageRegistry, MockImageRegistry};
pub use scaler::{MockWorkloadScaler, ScaleError, WorkloadScaler};
