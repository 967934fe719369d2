//! HTTP request handlers for the document API.
//!
//! Each handler decodes its request, calls the [`DocumentService`] once, and renders the
//! result through [`ApiResponse`] or [`ApiError`].

use std::sync::Arc;

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use jsondoc::prelude::*;

use super::response::{ApiError, ApiResponse};

/// Service handle shared by every request.
pub type SharedService<B> = Arc<DocumentService<B>>;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "jsondoc";

/// Document creation request
#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    /// Document ID; a missing or `null` ID is treated as empty and rejected by the
    /// service
    #[serde(default)]
    pub id: Option<String>,
    /// Document body; `null` or missing is rejected by the service
    pub data: Option<DocumentData>,
}

/// Document update request
#[derive(Debug, Deserialize)]
pub struct UpdateDocumentRequest {
    /// Replacement body
    pub data: Option<DocumentData>,
    /// When present, the update only applies if the stored version still matches
    pub version: Option<u64>,
}

/// System health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current system status
    pub status: &'static str,
    /// Service name
    pub service: &'static str,
}

/// `GET /health`
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    }))
}

/// `POST /documents`
pub async fn create_document<B: StoreBackend>(
    State(service): State<SharedService<B>>,
    payload: Result<Json<CreateDocumentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Document>>), ApiError> {
    let Json(request) = payload?;
    let id = request.id.unwrap_or_default();

    let document = service
        .create_document(&id, request.data)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            document,
            "Document created successfully",
        )),
    ))
}

/// `GET /documents`
pub async fn list_documents<B: StoreBackend>(
    State(service): State<SharedService<B>>,
) -> Result<Json<ApiResponse<Vec<Document>>>, ApiError> {
    let documents = service.list_documents().await?;

    Ok(Json(ApiResponse::success(documents)))
}

/// `GET /documents/{id}`
pub async fn get_document<B: StoreBackend>(
    State(service): State<SharedService<B>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Document>>, ApiError> {
    let document = service.get_document(&id).await?;

    Ok(Json(ApiResponse::success(document)))
}

/// `PUT /documents/{id}`
pub async fn update_document<B: StoreBackend>(
    State(service): State<SharedService<B>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDocumentRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Document>>, ApiError> {
    let Json(request) = payload?;

    let document = match request.version {
        Some(version) => {
            service
                .update_document_with_version(&id, request.data, version)
                .await?
        }
        None => service.update_document(&id, request.data).await?,
    };

    Ok(Json(ApiResponse::success(document)))
}

/// `DELETE /documents/{id}`
pub async fn delete_document<B: StoreBackend>(
    State(service): State<SharedService<B>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_document(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
