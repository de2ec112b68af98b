// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Vouch admission webhook server binary.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vouch_admission_core::{AdmissionEngine, WorkloadScaler};
use vouch_registry_ecr::EcrImageRegistry;
use vouch_server::{create_app_state, create_router};
use vouch_server_k8s::{RolloutApi, RolloutScaler};

mod version;

/// Vouch server - admission webhook verifying pod images against ECR.
#[derive(Parser, Debug)]
#[command(
	name = "vouch-server",
	about = "Image-verifying pod admission webhook",
	version
)]
struct Args {
	/// Subcommands for vouch-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Parse CLI arguments
	let args = Args::parse();

	// Handle subcommands that should not start the server
	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Load configuration
	let config = vouch_server_config::load_config()?;

	// Setup tracing
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		region = %config.registry.region,
		"starting vouch-server"
	);

	// Registry client for image existence checks
	let registry = EcrImageRegistry::new(&config.registry.region).await;

	// Rollout scaler startup lifecycle - degrade to verdict-only mode when
	// the cluster client is unavailable or remediation is switched off.
	let scaler: Option<Arc<dyn WorkloadScaler>> = if config.rollout.remediation_enabled {
		let api = RolloutApi {
			group: config.rollout.api_group.clone(),
			version: config.rollout.api_version.clone(),
			kind: config.rollout.kind.clone(),
			plural: config.rollout.plural.clone(),
		};
		match RolloutScaler::new(api).await {
			Ok(scaler) => Some(Arc::new(scaler)),
			Err(e) => {
				tracing::error!(error = %e, "K8s client initialization failed");
				tracing::warn!("Continuing without rollout remediation support");
				None
			}
		}
	} else {
		tracing::info!("Rollout remediation disabled by configuration");
		None
	};

	let engine = AdmissionEngine::new(Arc::new(registry), scaler);
	let state = create_app_state(engine);

	let app = create_router(state).layer(TraceLayer::new_for_http());

	// Start server
	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	// Run server with graceful shutdown
	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
