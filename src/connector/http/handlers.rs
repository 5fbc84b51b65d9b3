use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::connector::api::Container;
use crate::domain::{AnalysisRequest, AnalysisResult, StyleInfo};

use super::error::ApiError;

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Chat reply assistant API is running",
    })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}

/// `POST /api/analyze`
pub async fn analyze(
    State(container): State<Arc<Container>>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload?;
    let use_case = container.analyze_use_case();
    let result = use_case.execute(&request).await?;
    info!(
        "Returning {} suggestion(s) (tone: {})",
        result.suggestions().len(),
        result.emotion_tone()
    );
    Ok(Json(result))
}

/// `GET /api/styles`
pub async fn list_styles(State(container): State<Arc<Container>>) -> Json<Vec<StyleInfo>> {
    Json(container.list_styles_use_case().execute())
}
