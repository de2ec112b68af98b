// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! ECR-backed [`ImageRegistry`] implementation.
//!
//! Answers existence queries with `DescribeImages` point lookups scoped to
//! the configured region. The policy is fail-closed: a lookup that errors
//! for any reason (missing repository, missing tag, auth, transport)
//! answers "absent" so the admission engine denies rather than admitting
//! an unverified image. The cause is logged here and goes no further.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ecr::error::DisplayErrorContext;
use aws_sdk_ecr::types::ImageIdentifier;
use aws_sdk_ecr::Client;
use tracing::{debug, info, warn};
use vouch_admission_core::ImageRegistry;

/// ECR client wrapper. Cheap to clone; safe for concurrent use across
/// in-flight admission requests.
#[derive(Clone)]
pub struct EcrImageRegistry {
	client: Client,
}

impl EcrImageRegistry {
	/// Build a registry client for the given region using the default AWS
	/// credential chain (environment, profile, IRSA, instance metadata).
	pub async fn new(region: &str) -> Self {
		let config = aws_config::defaults(BehaviorVersion::latest())
			.region(Region::new(region.to_string()))
			.load()
			.await;
		info!(region, "ECR client initialized");
		Self {
			client: Client::new(&config),
		}
	}

	/// Build a registry around an existing SDK client (tests, custom
	/// credential setups).
	pub fn from_client(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl ImageRegistry for EcrImageRegistry {
	async fn exists(&self, repository: &str, tag: &str) -> bool {
		let result = self
			.client
			.describe_images()
			.repository_name(repository)
			.image_ids(ImageIdentifier::builder().image_tag(tag).build())
			.send()
			.await;

		match result {
			Ok(_) => {
				debug!(repository, tag, "image found in ECR");
				true
			}
			Err(e) => {
				// Not-found and transport failures collapse to "absent".
				warn!(
					repository,
					tag,
					error = %DisplayErrorContext(&e),
					"image not found in ECR, treating as absent"
				);
				false
			}
		}
	}
}
