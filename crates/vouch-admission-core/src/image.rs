// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Container image reference parsing.
//!
//! A reference has the shape `[registry-host/]repository-path[:tag]`, e.g.
//! `123.dkr.ecr.ap-south-1.amazonaws.com/my-repo:v2`. Registry lookups are
//! keyed on the final path segment split at the first `:`; a missing tag
//! means `latest`.

use std::fmt;

/// An opaque container image reference.
///
/// Identity is the raw string; the repository name and tag are derived on
/// demand and never stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference(String);

impl ImageReference {
	pub fn new(raw: impl Into<String>) -> Self {
		Self(raw.into())
	}

	/// The raw reference string as it appeared in the pod spec.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The repository name: the last `/`-separated segment, without any tag.
	pub fn repository(&self) -> &str {
		let segment = self.last_segment();
		segment
			.split_once(':')
			.map(|(repo, _)| repo)
			.unwrap_or(segment)
	}

	/// The tag, defaulting to `latest` when the reference carries none.
	pub fn tag(&self) -> &str {
		self
			.last_segment()
			.split_once(':')
			.map(|(_, tag)| tag)
			.unwrap_or("latest")
	}

	fn last_segment(&self) -> &str {
		self.0.rsplit('/').next().unwrap_or(&self.0)
	}
}

impl From<String> for ImageReference {
	fn from(raw: String) -> Self {
		Self(raw)
	}
}

impl From<&str> for ImageReference {
	fn from(raw: &str) -> Self {
		Self(raw.to_string())
	}
}

impl fmt::Display for ImageReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_ecr_reference_parses_repository_and_tag() {
		let image = ImageReference::new("123.dkr.ecr.ap-south-1.amazonaws.com/my-repo:v2");
		assert_eq!(image.repository(), "my-repo");
		assert_eq!(image.tag(), "v2");
	}

	#[test]
	fn bare_repository_defaults_to_latest() {
		let image = ImageReference::new("my-repo");
		assert_eq!(image.repository(), "my-repo");
		assert_eq!(image.tag(), "latest");
	}

	#[test]
	fn nested_path_uses_last_segment() {
		let image = ImageReference::new("registry.example.com/team/payments/checkout:1.4.0");
		assert_eq!(image.repository(), "checkout");
		assert_eq!(image.tag(), "1.4.0");
	}

	#[test]
	fn registry_host_with_port_does_not_confuse_tag() {
		// The port colon sits in an earlier segment, the tag split only
		// looks at the final one.
		let image = ImageReference::new("localhost:5000/my-repo:dev");
		assert_eq!(image.repository(), "my-repo");
		assert_eq!(image.tag(), "dev");
	}

	#[test]
	fn tag_split_is_on_first_colon_of_last_segment() {
		let image = ImageReference::new("repo:a:b");
		assert_eq!(image.repository(), "repo");
		assert_eq!(image.tag(), "a:b");
	}

	#[test]
	fn display_round_trips_the_raw_string() {
		let raw = "123.dkr.ecr.ap-south-1.amazonaws.com/my-repo:v2";
		assert_eq!(ImageReference::new(raw).to_string(), raw);
	}
}
