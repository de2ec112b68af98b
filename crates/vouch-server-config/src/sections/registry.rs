// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Image registry (ECR) configuration.

use serde::Deserialize;

/// Registry configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct RegistryConfig {
	/// AWS region the ECR lookups are scoped to.
	pub region: String,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			region: "ap-south-1".to_string(),
		}
	}
}

/// Registry configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryConfigLayer {
	#[serde(default)]
	pub region: Option<String>,
}

impl RegistryConfigLayer {
	pub fn merge(&mut self, other: RegistryConfigLayer) {
		if other.region.is_some() {
			self.region = other.region;
		}
	}

	pub fn finalize(self) -> RegistryConfig {
		RegistryConfig {
			region: self.region.unwrap_or_else(|| RegistryConfig::default().region),
		}
	}
}
