// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{Ack, Envelope, RegisterKeyRequest, Settings, ToggleSettingRequest, UploadResponse, UserId},
    state::AppState,
};

pub mod files;
pub mod health;
pub mod keys;
pub mod messages;
pub mod settings;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/register-key", post(keys::register_key))
        .route("/send", post(messages::send_message))
        .route("/inbox/{user_id}", get(messages::fetch_inbox))
        .route("/upload", post(files::upload_file))
        .route("/download/{filename}", get(files::download_file))
        .route("/settings", get(settings::get_settings))
        .route("/toggle-setting", post(settings::toggle_setting))
        .route("/health", get(health::health))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        keys::register_key,
        messages::send_message,
        messages::fetch_inbox,
        files::upload_file,
        files::download_file,
        settings::get_settings,
        settings::toggle_setting,
        health::health
    ),
    components(
        schemas(
            UserId,
            RegisterKeyRequest,
            Ack,
            Envelope,
            UploadResponse,
            Settings,
            ToggleSettingRequest,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Keys", description = "Public-key directory"),
        (name = "Messages", description = "Encrypted envelope relay"),
        (name = "Files", description = "Encrypted-at-rest file vault"),
        (name = "Settings", description = "Runtime feature flags"),
        (name = "Health", description = "Liveness probe")
    )
)]
struct ApiDoc;
