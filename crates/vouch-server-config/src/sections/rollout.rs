// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Rollout remediation configuration.

use serde::Deserialize;

/// Rollout configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct RolloutConfig {
	/// Kill switch for the scale-to-zero action. Verdicts are unaffected.
	pub remediation_enabled: bool,
	pub api_group: String,
	pub api_version: String,
	pub kind: String,
	pub plural: String,
}

impl Default for RolloutConfig {
	fn default() -> Self {
		Self {
			remediation_enabled: true,
			api_group: "argoproj.io".to_string(),
			api_version: "v1alpha1".to_string(),
			kind: "Rollout".to_string(),
			plural: "rollouts".to_string(),
		}
	}
}

/// Rollout configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RolloutConfigLayer {
	#[serde(default)]
	pub remediation_enabled: Option<bool>,
	#[serde(default)]
	pub api_group: Option<String>,
	#[serde(default)]
	pub api_version: Option<String>,
	#[serde(default)]
	pub kind: Option<String>,
	#[serde(default)]
	pub plural: Option<String>,
}

impl RolloutConfigLayer {
	pub fn merge(&mut self, other: RolloutConfigLayer) {
		if other.remediation_enabled.is_some() {
			self.remediation_enabled = other.remediation_enabled;
		}
		if other.api_group.is_some() {
			self.api_group = other.api_group;
		}
		if other.api_version.is_some() {
			self.api_version = other.api_version;
		}
		if other.kind.is_some() {
			self.kind = other.kind;
		}
		if other.plural.is_some() {
			self.plural = other.plural;
		}
	}

	pub fn finalize(self) -> RolloutConfig {
		let defaults = RolloutConfig::default();
		RolloutConfig {
			remediation_enabled: self
				.remediation_enabled
				.unwrap_or(defaults.remediation_enabled),
			api_group: self.api_group.unwrap_or(defaults.api_group),
			api_version: self.api_version.unwrap_or(defaults.api_version),
			kind: self.kind.unwrap_or(defaults.kind),
			plural: self.plural.unwrap_or(defaults.plural),
		}
	}
}
