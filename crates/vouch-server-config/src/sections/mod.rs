// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration sections, one module per subsystem.

mod http;
mod logging;
mod registry;
mod rollout;

pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use registry::{RegistryConfig, RegistryConfigLayer};
pub use rollout::{RolloutConfig, RolloutConfigLayer};
