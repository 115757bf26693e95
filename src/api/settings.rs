// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use crate::{
    models::{Settings, ToggleSettingRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/settings",
    tag = "Settings",
    responses((status = 200, body = Settings))
)]
pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(*state.settings.read().await)
}

/// Flip a flag and return the new snapshot. Unknown keys return the
/// snapshot unchanged rather than erroring; clients probe with keys from
/// newer UI builds.
#[utoipa::path(
    post,
    path = "/toggle-setting",
    request_body = ToggleSettingRequest,
    tag = "Settings",
    responses((status = 200, body = Settings))
)]
pub async fn toggle_setting(
    State(state): State<AppState>,
    Json(request): Json<ToggleSettingRequest>,
) -> Json<Settings> {
    let mut settings = state.settings.write().await;
    let snapshot = settings.toggle(&request.key);
    tracing::info!(key = %request.key, "toggled setting");
    Json(snapshot)
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
    async fn get_settings_returns_defaults() {
        let (_dir, state) = test_state();
        let Json(settings) = get_settings(State(state)).await;
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn toggle_flips_and_is_visible_to_subsequent_reads() {
        let (_dir, state) = test_state();

        let Json(updated) = toggle_setting(
            State(state.clone()),
            Json(ToggleSettingRequest {
                key: "encryptionAtRest".into(),
            }),
        )
        .await;
        assert!(!updated.encryption_at_rest);

        let Json(settings) = get_settings(State(state)).await;
        assert!(!settings.encryption_at_rest);
    }

    #[tokio::test]
    async fn toggle_twice_restores_original_value() {
        let (_dir, state) = test_state();

        for _ in 0..2 {
            toggle_setting(
                State(state.clone()),
                Json(ToggleSettingRequest {
                    key: "p2pDiscovery".into(),
                }),
            )
            .await;
        }

        let Json(settings) = get_settings(State(state)).await;
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn toggle_unknown_key_returns_unchanged_snapshot() {
        let (_dir, state) = test_state();

        let Json(snapshot) = toggle_setting(
            State(state),
            Json(ToggleSettingRequest {
                key: "doesNotExist".into(),
            }),
        )
        .await;
        assert_eq!(snapshot, Settings::default());
    }
}
