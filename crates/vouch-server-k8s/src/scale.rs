// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Scale-to-zero against the rollout scale subresource.
//!
//! Applies a JSON patch replacing `/spec/replicas` with 0 on the scale
//! subresource of `argoproj.io/v1alpha1` `rollouts/<name>`, matching what
//! `kubectl patch --subresource=scale --type=json` would send.

use async_trait::async_trait;
use kube::api::{Api, ApiResource, DynamicObject, GroupVersionKind, Patch, PatchParams};
use kube::Client;
use tracing::{debug, info};
use vouch_admission_core::{ScaleError, WorkloadScaler};

/// Where the rollout resource lives in the API. Defaults to Argo Rollouts.
#[derive(Debug, Clone)]
pub struct RolloutApi {
	pub group: String,
	pub version: String,
	pub kind: String,
	pub plural: String,
}

impl Default for RolloutApi {
	fn default() -> Self {
		Self {
			group: "argoproj.io".to_string(),
			version: "v1alpha1".to_string(),
			kind: "Rollout".to_string(),
			plural: "rollouts".to_string(),
		}
	}
}

impl RolloutApi {
	fn resource(&self) -> ApiResource {
		let gvk = GroupVersionKind::gvk(&self.group, &self.version, &self.kind);
		ApiResource::from_gvk_with_plural(&gvk, &self.plural)
	}
}

/// Production scaler using the kube crate.
///
/// Holds one long-lived client; `Api` handles are constructed per call
/// because the namespace varies per admission request.
#[derive(Clone)]
pub struct RolloutScaler {
	client: Client,
	resource: ApiResource,
}

impl RolloutScaler {
	/// Create a scaler that auto-discovers cluster configuration
	/// (in-cluster service account, `KUBECONFIG`, `~/.kube/config`).
	pub async fn new(api: RolloutApi) -> Result<Self, ScaleError> {
		let client = Client::try_default().await.map_err(|e| ScaleError::Api {
			message: e.to_string(),
		})?;
		debug!(group = %api.group, plural = %api.plural, "K8s rollout scaler initialized");
		Ok(Self::with_client(client, api))
	}

	/// Create a scaler around an existing client.
	pub fn with_client(client: Client, api: RolloutApi) -> Self {
		Self {
			client,
			resource: api.resource(),
		}
	}

	fn replicas_to_zero_patch() -> Result<json_patch::Patch, ScaleError> {
		serde_json::from_value(serde_json::json!([
			{ "op": "replace", "path": "/spec/replicas", "value": 0 }
		]))
		.map_err(|e| ScaleError::Api {
			message: e.to_string(),
		})
	}
}

#[async_trait]
impl WorkloadScaler for RolloutScaler {
	async fn scale_to_zero(&self, namespace: &str, name: &str) -> Result<(), ScaleError> {
		let api: Api<DynamicObject> =
			Api::namespaced_with(self.client.clone(), namespace, &self.resource);

		let patch: Patch<()> = Patch::Json(Self::replicas_to_zero_patch()?);

		info!(namespace, rollout = name, "scaling rollout to 0 replicas");
		match api.patch_scale(name, &PatchParams::default(), &patch).await {
			Ok(_) => Ok(()),
			Err(kube::Error::Api(err)) if err.code == 404 => Err(ScaleError::NotFound {
				namespace: namespace.to_string(),
				name: name.to_string(),
			}),
			Err(e) => Err(ScaleError::Api {
				message: e.to_string(),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_api_targets_argo_rollouts() {
		let api = RolloutApi::default();
		assert_eq!(api.group, "argoproj.io");
		assert_eq!(api.version, "v1alpha1");
		assert_eq!(api.plural, "rollouts");
	}

	#[test]
	fn patch_replaces_spec_replicas_with_zero() {
		let patch = RolloutScaler::replicas_to_zero_patch().unwrap();
		let value = serde_json::to_value(&patch).unwrap();
		assert_eq!(
			value,
			serde_json::json!([
				{ "op": "replace", "path": "/spec/replicas", "value": 0 }
			])
		);
	}
}
