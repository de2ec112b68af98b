// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Read-only pod view consumed by the admission engine.
//!
//! The wire layer flattens the pod's three container groups into one
//! ordered sequence (regular, then init, then ephemeral) before handing
//! the subject to the engine; nothing here is mutated after construction.

use std::collections::BTreeMap;

use crate::image::ImageReference;

/// A single container entry: name plus image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
	pub name: String,
	pub image: ImageReference,
}

impl ContainerSpec {
	pub fn new(name: impl Into<String>, image: impl Into<ImageReference>) -> Self {
		Self {
			name: name.into(),
			image: image.into(),
		}
	}
}

/// The pod under review, built once per admission request.
///
/// `containers` is the concatenation of the pod's regular, init and
/// ephemeral container groups, preserving each group's internal order.
#[derive(Debug, Clone, Default)]
pub struct PodAdmissionSubject {
	pub namespace: String,
	pub name: String,
	pub labels: BTreeMap<String, String>,
	pub containers: Vec<ContainerSpec>,
}

impl PodAdmissionSubject {
	/// All image references in check order. Repeated images appear once per
	/// occurrence; the engine does not deduplicate.
	pub fn image_refs(&self) -> impl Iterator<Item = &ImageReference> {
		self.containers.iter().map(|c| &c.image)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn image_refs_preserve_container_order() {
		let pod = PodAdmissionSubject {
			namespace: "payments".to_string(),
			name: "checkout-abc".to_string(),
			labels: BTreeMap::new(),
			containers: vec![
				ContainerSpec::new("app", "repo/app:v1"),
				ContainerSpec::new("init-db", "repo/migrate:v1"),
				ContainerSpec::new("debug", "repo/tools:latest"),
			],
		};

		let refs: Vec<&str> = pod.image_refs().map(|i| i.as_str()).collect();
		assert_eq!(refs, vec!["repo/app:v1", "repo/migrate:v1", "repo/tools:latest"]);
	}

	#[test]
	fn repeated_images_are_not_deduplicated() {
		let pod = PodAdmissionSubject {
			containers: vec![
				ContainerSpec::new("a", "repo/app:v1"),
				ContainerSpec::new("b", "repo/app:v1"),
			],
			..Default::default()
		};

		assert_eq!(pod.image_refs().count(), 2);
	}

	#[test]
	fn empty_pod_yields_no_refs() {
		let pod = PodAdmissionSubject::default();
		assert_eq!(pod.image_refs().count(), 0);
	}
}
