// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Workload scale-down collaborator seam.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the scale-down adapter.
///
/// The engine logs and discards these; they never reach the admission
/// response path.
#[derive(Error, Debug)]
pub enum ScaleError {
	#[error("workload not found: {namespace}/{name}")]
	NotFound { namespace: String, name: String },

	#[error("scale API error: {message}")]
	Api { message: String },
}

/// Sets a workload's desired replica count to zero.
///
/// Best-effort from the engine's point of view: one attempt per admission
/// event, no retries, failure never alters the verdict.
#[async_trait]
pub trait WorkloadScaler: Send + Sync {
	async fn scale_to_zero(&self, namespace: &str, name: &str) -> Result<(), ScaleError>;
}

/// Recording scaler for tests, optionally failing every call.
#[derive(Debug, Clone, Default)]
pub struct MockWorkloadScaler {
	calls: Arc<Mutex<Vec<(String, String)>>>,
	fail: Arc<Mutex<bool>>,
}

impl MockWorkloadScaler {
	pub fn new() -> Self {
		Self::default()
	}

	/// Make every subsequent call fail with a transport-style error.
	pub fn fail_next_calls(&self) {
		*self.fail.lock().unwrap() = true;
	}

	/// Every scale request received so far, as `(namespace, name)`.
	pub fn calls(&self) -> Vec<(String, String)> {
		self.calls.lock().unwrap().clone()
	}
}

#[async_trait]
impl WorkloadScaler for MockWorkloadScaler {
	async fn scale_to_zero(&self, namespace: &str, name: &str) -> Result<(), ScaleError> {
		self
			.calls
			.lock()
			.unwrap()
			.push((namespace.to_string(), name.to_string()));

		if *self.fail.lock().unwrap() {
			Err(ScaleError::Api {
				message: "simulated transport error".to_string(),
			})
		} else {
			Ok(())
		}
	}
}
