// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Partial configuration assembled from one source, merged by precedence.

use serde::Deserialize;

use crate::sections::{
	HttpConfigLayer, LoggingConfigLayer, RegistryConfigLayer, RolloutConfigLayer,
};

/// One layer of configuration; every section optional so sources can
/// contribute only what they know about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub registry: Option<RegistryConfigLayer>,
	#[serde(default)]
	pub rollout: Option<RolloutConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge `other` on top of this layer; `other` wins where present.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_section(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_section(&mut self.registry, other.registry, RegistryConfigLayer::merge);
		merge_section(&mut self.rollout, other.rollout, RolloutConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: impl Fn(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(b), Some(o)) => merge(b, o),
		(None, Some(o)) => *base = Some(o),
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_overrides_present_fields_only() {
		let mut base = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: Some("127.0.0.1".to_string()),
				port: Some(8443),
			}),
			..Default::default()
		};

		base.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: None,
				port: Some(9443),
			}),
			registry: Some(RegistryConfigLayer {
				region: Some("eu-west-1".to_string()),
			}),
			..Default::default()
		});

		let http = base.http.unwrap().finalize();
		assert_eq!(http.host, "127.0.0.1");
		assert_eq!(http.port, 9443);
		assert_eq!(base.registry.unwrap().finalize().region, "eu-west-1");
	}

	#[test]
	fn test_toml_parse() {
		let layer: ServerConfigLayer = toml::from_str(
			r#"
			[http]
			port = 9000

			[rollout]
			remediation_enabled = false
			"#,
		)
		.unwrap();

		assert_eq!(layer.http.unwrap().port, Some(9000));
		assert_eq!(layer.rollout.unwrap().remediation_enabled, Some(false));
		assert!(layer.registry.is_none());
	}
}
