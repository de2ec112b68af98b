// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The admission decision engine.
//!
//! One state machine per request: iterate the pod's image references in
//! order, asking the registry about each; the first absent image denies
//! the pod and stops the scan. A denial additionally resolves the owning
//! rollout from the pod's labels and, if one resolves, asks the scaler to
//! take it to zero replicas — once, with failures logged and discarded.
//!
//! The checks are deliberately sequential: which images get checked before
//! remediation fires depends on the regular → init → ephemeral order, so
//! the loop must not be parallelized.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::ownership::resolve_rollout_target;
use crate::pod::PodAdmissionSubject;
use crate::registry::ImageRegistry;
use crate::scaler::WorkloadScaler;

/// Verdict message on allow. Fixed per outcome, never per image.
pub const ALLOWED_MESSAGE: &str = "all images verified in registry";

/// Verdict message on deny. The failing image is logged, not reported.
pub const DENIED_MESSAGE: &str = "one or more images not found in registry";

/// The admission outcome for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
	pub allowed: bool,
	pub message: String,
}

impl Verdict {
	pub fn allowed() -> Self {
		Self {
			allowed: true,
			message: ALLOWED_MESSAGE.to_string(),
		}
	}

	pub fn denied() -> Self {
		Self {
			allowed: false,
			message: DENIED_MESSAGE.to_string(),
		}
	}
}

/// Orchestrates image collection, registry checks and remediation.
///
/// `scaler` is optional: a server running without cluster credentials (or
/// with remediation disabled) still produces correct verdicts and simply
/// skips the scale-down.
pub struct AdmissionEngine {
	registry: Arc<dyn ImageRegistry>,
	scaler: Option<Arc<dyn WorkloadScaler>>,
}

impl AdmissionEngine {
	pub fn new(registry: Arc<dyn ImageRegistry>, scaler: Option<Arc<dyn WorkloadScaler>>) -> Self {
		Self { registry, scaler }
	}

	/// Produce the verdict for one pod.
	///
	/// A pod with zero containers across all groups is allowed. Remediation
	/// runs at most once, only on denial, after the verdict is already
	/// fixed; its outcome cannot change the verdict.
	pub async fn decide(&self, pod: &PodAdmissionSubject) -> Verdict {
		info!(namespace = %pod.namespace, pod = %pod.name, "validating pod images");

		for image in pod.image_refs() {
			debug!(image = %image, "checking image in registry");
			if !self.registry.exists(image.repository(), image.tag()).await {
				warn!(
					namespace = %pod.namespace,
					pod = %pod.name,
					image = %image,
					"image not found in registry, denying admission"
				);
				let verdict = Verdict::denied();
				self.remediate(pod).await;
				return verdict;
			}
		}

		Verdict::allowed()
	}

	async fn remediate(&self, pod: &PodAdmissionSubject) {
		let Some(scaler) = &self.scaler else {
			debug!("no workload scaler configured, skipping remediation");
			return;
		};

		let Some(target) = resolve_rollout_target(&pod.namespace, &pod.labels) else {
			return;
		};

		match scaler
			.scale_to_zero(&target.namespace, &target.workload_name)
			.await
		{
			Ok(()) => info!(
				namespace = %target.namespace,
				rollout = %target.workload_name,
				"scaled rollout to zero replicas"
			),
			Err(e) => error!(
				namespace = %target.namespace,
				rollout = %target.workload_name,
				error = %e,
				"failed to scale rollout, verdict unaffected"
			),
		}
	}
}
