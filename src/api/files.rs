// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::UploadResponse,
    state::AppState,
    vault::ENC_SUFFIX,
};

#[utoipa::path(
    post,
    path = "/upload",
    tag = "Files",
    responses(
        (status = 200, body = UploadResponse),
        (status = 400, description = "No file present in the request")
    )
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("No file"))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let original_name = field.file_name().unwrap_or("upload.bin").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|_| ApiError::bad_request("No file"))?;
        return store_upload(&state, original_name, &data).await;
    }
    Err(ApiError::bad_request("No file"))
}

/// Persist an upload under a server-assigned storage name.
///
/// Split out of the multipart handler so the storage path is directly
/// testable; names are UUIDs, so concurrent uploads never race on a path.
pub(crate) async fn store_upload(
    state: &AppState,
    original_name: String,
    data: &[u8],
) -> Result<Json<UploadResponse>, ApiError> {
    let encrypt_at_rest = state.settings.read().await.encryption_at_rest;
    let storage_name = Uuid::new_v4().simple().to_string();
    let stored = state.vault.store(&storage_name, data, encrypt_at_rest)?;

    tracing::info!(
        filename = %stored.storage_name,
        size = data.len(),
        encrypted = stored.encrypted,
        "stored upload"
    );

    Ok(Json(UploadResponse {
        filename: stored.storage_name,
        original_name,
    }))
}

#[utoipa::path(
    get,
    path = "/download/{filename}",
    params(
        ("filename" = String, Path, description = "Server-assigned storage name")
    ),
    tag = "Files",
    responses(
        (status = 200, description = "File bytes", content_type = "application/octet-stream"),
        (status = 404, description = "File not found"),
        (status = 500, description = "Decryption failed")
    )
)]
pub async fn download_file(
    Path(filename): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let encrypt_at_rest = state.settings.read().await.encryption_at_rest;
    let bytes = state.vault.retrieve(&filename, encrypt_at_rest)?;

    let download_name = sanitize_filename(filename.trim_end_matches(ENC_SUFFIX));
    let headers = [
        (
            header::CONTENT_TYPE,
            "application/octet-stream".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{download_name}\""),
        ),
    ];
    Ok((headers, bytes))
}

/// Strip anything that could escape a quoted `Content-Disposition`
/// filename or smuggle a path: quotes, backslashes, separators, control
/// characters. The storage name is server-assigned, but the request path
/// is client-supplied and must be treated as hostile.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_control() && !matches!(c, '"' | '\\' | '/'))
        .collect()
}
