// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the vouch server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`VOUCH_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use vouch_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Webhook listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub registry: RegistryConfig,
	pub rollout: RolloutConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`VOUCH_SERVER_*`)
/// 2. Config file (`/etc/vouch/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let registry = layer.registry.unwrap_or_default().finalize();
	let rollout = layer.rollout.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&registry, &rollout)?;

	info!(
		host = %http.host,
		port = http.port,
		region = %registry.region,
		remediation_enabled = rollout.remediation_enabled,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		registry,
		rollout,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(registry: &RegistryConfig, rollout: &RolloutConfig) -> Result<(), ConfigError> {
	if registry.region.trim().is_empty() {
		return Err(ConfigError::Validation(
			"VOUCH_SERVER_REGISTRY_REGION must not be empty".to_string(),
		));
	}

	if rollout.remediation_enabled
		&& (rollout.api_group.trim().is_empty() || rollout.plural.trim().is_empty())
	{
		return Err(ConfigError::Validation(
			"rollout api_group and plural must be set while remediation is enabled".to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_finalize() {
		let config = finalize(ServerConfigLayer::default()).unwrap();
		assert_eq!(config.socket_addr(), "0.0.0.0:8443");
		assert_eq!(config.registry.region, "ap-south-1");
		assert!(config.rollout.remediation_enabled);
		assert_eq!(config.logging.level, "info");
	}

	#[test]
	fn test_empty_region_rejected() {
		let layer = ServerConfigLayer {
			registry: Some(RegistryConfigLayer {
				region: Some("  ".to_string()),
			}),
			..Default::default()
		};
		assert!(finalize(layer).is_err());
	}

	#[test]
	fn test_empty_rollout_group_rejected_only_when_remediation_enabled() {
		let layer = ServerConfigLayer {
			rollout: Some(RolloutConfigLayer {
				api_group: Some(String::new()),
				..Default::default()
			}),
			..Default::default()
		};
		assert!(finalize(layer).is_err());

		let layer = ServerConfigLayer {
			rollout: Some(RolloutConfigLayer {
				remediation_enabled: Some(false),
				api_group: Some(String::new()),
				..Default::default()
			}),
			..Default::default()
		};
		assert!(finalize(layer).is_ok());
	}

	#[test]
	fn test_file_layer_overrides_defaults() {
		let mut merged = ServerConfigLayer::default();
		merged.merge(
			toml::from_str(
				r#"
				[http]
				port = 9443

				[registry]
				region = "eu-central-1"
				"#,
			)
			.unwrap(),
		);

		let config = finalize(merged).unwrap();
		assert_eq!(config.http.port, 9443);
		assert_eq!(config.registry.region, "eu-central-1");
	}
}
