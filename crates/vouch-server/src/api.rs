// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Router and shared application state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use vouch_admission_core::AdmissionEngine;

use crate::routes;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
	pub engine: Arc<AdmissionEngine>,
}

/// Wrap an engine into the handler state.
pub fn create_app_state(engine: AdmissionEngine) -> AppState {
	AppState {
		engine: Arc::new(engine),
	}
}

/// Build the webhook router.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/validate", post(routes::admission::validate))
		.route("/health", get(routes::health::health_check))
		.with_state(state)
}
