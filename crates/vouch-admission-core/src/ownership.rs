// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Rollout ownership inference from pod labels.
//!
//! A pod is rollout-managed iff it carries the Argo Rollouts pod template
//! hash label; the rollout's name is then taken from `app`, falling back
//! to `app.kubernetes.io/name`. Resolution is pure: it performs no I/O
//! and an undeterminable name is not an admission failure.

use std::collections::BTreeMap;

use tracing::{debug, warn};

/// Label Argo Rollouts stamps on every pod it manages.
pub const ROLLOUT_POD_TEMPLATE_HASH_LABEL: &str = "rollouts-pod-template-hash";

/// Preferred source for the rollout name.
pub const APP_LABEL: &str = "app";

/// Fallback source for the rollout name.
pub const APP_NAME_LABEL: &str = "app.kubernetes.io/name";

/// The workload a denial should scale to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationTarget {
	pub namespace: String,
	pub workload_name: String,
}

/// Resolve the owning rollout for a pod from its labels.
///
/// Returns `None` when the pod is not rollout-managed, or when it is but
/// neither name label is present (logged; remediation is simply skipped).
pub fn resolve_rollout_target(
	namespace: &str,
	labels: &BTreeMap<String, String>,
) -> Option<RemediationTarget> {
	if !labels.contains_key(ROLLOUT_POD_TEMPLATE_HASH_LABEL) {
		debug!(namespace, "pod is not managed by a rollout");
		return None;
	}

	let name = labels
		.get(APP_LABEL)
		.or_else(|| labels.get(APP_NAME_LABEL));

	match name {
		Some(name) => Some(RemediationTarget {
			namespace: namespace.to_string(),
			workload_name: name.clone(),
		}),
		None => {
			warn!(
				namespace,
				"rollout-managed pod has no usable name label, skipping remediation"
			);
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn app_label_wins() {
		let target = resolve_rollout_target(
			"payments",
			&labels(&[
				(ROLLOUT_POD_TEMPLATE_HASH_LABEL, "abc"),
				(APP_LABEL, "checkout"),
				(APP_NAME_LABEL, "other-name"),
			]),
		);

		assert_eq!(
			target,
			Some(RemediationTarget {
				namespace: "payments".to_string(),
				workload_name: "checkout".to_string(),
			})
		);
	}

	#[test]
	fn falls_back_to_kubernetes_name_label() {
		let target = resolve_rollout_target(
			"payments",
			&labels(&[
				(ROLLOUT_POD_TEMPLATE_HASH_LABEL, "abc"),
				(APP_NAME_LABEL, "checkout"),
			]),
		);

		assert_eq!(target.map(|t| t.workload_name), Some("checkout".to_string()));
	}

	#[test]
	fn hash_without_name_labels_resolves_to_none() {
		let target =
			resolve_rollout_target("payments", &labels(&[(ROLLOUT_POD_TEMPLATE_HASH_LABEL, "abc")]));
		assert!(target.is_none());
	}

	#[test]
	fn hash_value_is_irrelevant() {
		let target = resolve_rollout_target(
			"payments",
			&labels(&[(ROLLOUT_POD_TEMPLATE_HASH_LABEL, ""), (APP_LABEL, "checkout")]),
		);
		assert!(target.is_some());
	}

	#[test]
	fn non_rollout_pod_resolves_to_none_regardless_of_other_labels() {
		let target = resolve_rollout_target(
			"payments",
			&labels(&[(APP_LABEL, "checkout"), (APP_NAME_LABEL, "checkout")]),
		);
		assert!(target.is_none());
	}

	#[test]
	fn empty_labels_resolve_to_none() {
		assert!(resolve_rollout_target("payments", &BTreeMap::new()).is_none());
	}
}
