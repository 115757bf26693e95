// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use crate::{
    models::{Ack, RegisterKeyRequest},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/register-key",
    request_body = RegisterKeyRequest,
    tag = "Keys",
    responses((status = 200, body = Ack))
)]
pub async fn register_key(
    State(state): State<AppState>,
    Json(request): Json<RegisterKeyRequest>,
) -> Json<Ack> {
    let mut directory = state.directory.write().await;
    directory.register(request.user_id, request.public_key);
    Json(Ack::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::{FileVault, VaultPaths};
    use tempfile::TempDir;

    fn test_state() -> (TempDir, AppState) {
        let dir = TempDir::new().expect("temp dir");
        let vault = FileVault::new(VaultPaths::new(dir.path())).expect("vault init");
        (dir, AppState::new(vault))
    }

    #[tokio::test]
    async fn register_key_stores_the_key() {
        let (_dir, state) = test_state();

        let Json(ack) = register_key(
            State(state.clone()),
            Json(RegisterKeyRequest {
                user_id: "alice".into(),
                public_key: "pkA".into(),
            }),
        )
        .await;

        assert_eq!(ack, Ack::ok());
        assert_eq!(
            state.directory.read().await.lookup(&"alice".into()),
            Some("pkA")
        );
    }

    #[tokio::test]
    async fn register_key_overwrites_existing_key() {
        let (_dir, state) = test_state();

        for key in ["pkA", "pkA2"] {
            register_key(
                State(state.clone()),
                Json(RegisterKeyRequest {
                    user_id: "alice".into(),
                    public_key: key.into(),
                }),
            )
            .await;
        }

        assert_eq!(
            state.directory.read().await.lookup(&"alice".into()),
            Some("pkA2")
        );
    }
}
