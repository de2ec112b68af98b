// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Admission review HTTP handler.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::api::AppState;
use crate::review::{AdmissionReviewRequest, AdmissionReviewResponse};

/// POST /validate - decide one AdmissionReview.
///
/// Always answers 200 with a review response; a bad pod is expressed as
/// `allowed: false`, never as an HTTP error.
pub async fn validate(
	State(state): State<AppState>,
	Json(review): Json<AdmissionReviewRequest>,
) -> Json<AdmissionReviewResponse> {
	let uid = review.request.uid.clone();
	debug!(
		uid = %uid,
		operation = review.request.operation.as_deref().unwrap_or("unknown"),
		"received admission review"
	);

	let pod = review.request.object.into_subject();
	let verdict = state.engine.decide(&pod).await;

	Json(AdmissionReviewResponse::new(uid, &verdict))
}
