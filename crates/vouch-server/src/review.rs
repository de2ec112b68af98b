// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! AdmissionReview wire types.
//!
//! Only the fields this webhook consumes are modeled; everything else in
//! the review payload is ignored on deserialization. The response
//! envelope is fixed: `admission.k8s.io/v1` `AdmissionReview` with the
//! request uid echoed back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vouch_admission_core::{ContainerSpec, PodAdmissionSubject, Verdict};

pub const API_VERSION: &str = "admission.k8s.io/v1";
pub const KIND: &str = "AdmissionReview";

/// Inbound review envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionReviewRequest {
	pub request: AdmissionRequest,
}

/// The request half of an AdmissionReview.
#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionRequest {
	pub uid: String,
	#[serde(default)]
	pub operation: Option<String>,
	#[serde(default)]
	pub object: PodObject,
}

/// The pod under review, as it appears on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodObject {
	#[serde(default)]
	pub metadata: PodMetadata,
	#[serde(default)]
	pub spec: PodSpecObject,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodMetadata {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub namespace: String,
	#[serde(default)]
	pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpecObject {
	#[serde(default)]
	pub containers: Vec<ContainerObject>,
	#[serde(default)]
	pub init_containers: Vec<ContainerObject>,
	#[serde(default)]
	pub ephemeral_containers: Vec<ContainerObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContainerObject {
	#[serde(default)]
	pub name: String,
	pub image: String,
}

impl PodObject {
	/// Flatten the wire pod into the engine's view: regular, then init,
	/// then ephemeral containers, each group's order preserved.
	pub fn into_subject(self) -> PodAdmissionSubject {
		let containers = self
			.spec
			.containers
			.into_iter()
			.chain(self.spec.init_containers)
			.chain(self.spec.ephemeral_containers)
			.map(|c| ContainerSpec::new(c.name, c.image))
			.collect();

		PodAdmissionSubject {
			namespace: self.metadata.namespace,
			name: self.metadata.name,
			labels: self.metadata.labels,
			containers,
		}
	}
}

/// Outbound review envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionReviewResponse {
	pub api_version: &'static str,
	pub kind: &'static str,
	pub response: AdmissionResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdmissionResponse {
	pub uid: String,
	pub allowed: bool,
	pub status: AdmissionStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdmissionStatus {
	pub message: String,
}

impl AdmissionReviewResponse {
	pub fn new(uid: String, verdict: &Verdict) -> Self {
		Self {
			api_version: API_VERSION,
			kind: KIND,
			response: AdmissionResponse {
				uid,
				allowed: verdict.allowed,
				status: AdmissionStatus {
					message: verdict.message.clone(),
				},
			},
		}
	}
}
