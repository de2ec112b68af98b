// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Registry existence-check collaborator seam.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// Point query for a `(repository, tag)` pair in the image registry.
///
/// Implementations are fail-closed: an indeterminate lookup (transport
/// error, auth failure, not found) must answer `false`, never surface an
/// error to the engine. The adapter logs the cause.
#[async_trait]
pub trait ImageRegistry: Send + Sync {
	async fn exists(&self, repository: &str, tag: &str) -> bool;
}

/// In-memory registry for tests.
///
/// Holds the set of present `(repository, tag)` pairs and records every
/// lookup, so tests can assert both verdicts and short-circuit behavior.
#[derive(Debug, Clone, Default)]
pub struct MockImageRegistry {
	present: Arc<Mutex<HashSet<(String, String)>>>,
	calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockImageRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Mark a `(repository, tag)` pair as present in the registry.
	pub fn mark_present(&self, repository: &str, tag: &str) {
		self
			.present
			.lock()
			.unwrap()
			.insert((repository.to_string(), tag.to_string()));
	}

	/// Every lookup performed so far, in order.
	pub fn calls(&self) -> Vec<(String, String)> {
		self.calls.lock().unwrap().clone()
	}
}

#[async_trait]
impl ImageRegistry for MockImageRegistry {
	async fn exists(&self, repository: &str, tag: &str) -> bool {
		self
			.calls
			.lock()
			.unwrap()
			.push((repository.to_string(), tag.to_string()));
		self
			.present
			.lock()
			.unwrap()
			.contains(&(repository.to_string(), tag.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn mock_answers_false_for_unknown_pairs() {
		let registry = MockImageRegistry::new();
		registry.mark_present("my-repo", "v2");

		assert!(registry.exists("my-repo", "v2").await);
		assert!(!registry.exists("my-repo", "v3").await);
		assert!(!registry.exists("other-repo", "v2").await);
	}

	#[tokio::test]
	async fn mock_records_lookups_in_order() {
		let registry = MockImageRegistry::new();
		registry.exists("a", "1").await;
		registry.exists("b", "2").await;

		assert_eq!(
			registry.calls(),
			vec![
				("a".to_string(), "1".to_string()),
				("b".to_string(), "2".to_string()),
			]
		);
	}
}
