// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::ApiError,
    models::{Ack, Envelope, UserId},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/send",
    request_body = Envelope,
    tag = "Messages",
    responses(
        (status = 200, body = Ack),
        (status = 404, description = "Recipient not found")
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    Json(envelope): Json<Envelope>,
) -> Result<Json<Ack>, ApiError> {
    let directory = state.directory.read().await;
    let mut mailbox = state.mailbox.write().await;
    mailbox.send(&directory, envelope)?;
    Ok(Json(Ack::stored()))
}

/// Drain the mailbox: every returned envelope is removed in the same call,
/// so a second fetch yields nothing. There is no redelivery.
#[utoipa::path(
    get,
    path = "/inbox/{user_id}",
    params(
        ("user_id" = String, Path, description = "Recipient identifier")
    ),
    tag = "Messages",
    responses((status = 200, body = [Envelope]))
)]
pub async fn fetch_inbox(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Json<Vec<Envelope>> {
    // Write lock held across the whole read-and-remove so a concurrent
    // send lands entirely before or entirely after this drain.
    let mut mailbox = state.mailbox.write().await;
    let inbox = mailbox.drain_inbox(&UserId(user_id));
    if !inbox.is_empty() {
        tracing::debug!(count = inbox.len(), "drained mailbox");
    }
    Json(inbox)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::{FileVault, VaultPaths};
    use axum::http::StatusCode;
    use tempfile::TempDir;

    fn test_state() -> (TempDir, AppState) {
        let dir = TempDir::new().expect("temp dir");
        let vault = FileVault::new(VaultPaths::new(dir.path())).expect("vault init");
        (dir, AppState::new(vault))
    }

    async fn register(state: &AppState, user: &str) {
        state
            .directory
            .write()
            .await
            .register(user.into(), format!("pk-{user}"));
    }

    fn envelope(to: &str, from: &str, payload: &str, nonce: &str) -> Envelope {
        Envelope {
            to: to.into(),
            from: from.into(),
            box_payload: payload.into(),
            nonce: nonce.into(),
        }
    }

    #[tokio::test]
    async fn send_to_unregistered_recipient_is_404() {
        let (_dir, state) = test_state();

        let err = send_message(State(state), Json(envelope("alice", "bob", "c1", "n1")))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Recipient not found");
    }

    #[tokio::test]
    async fn register_send_fetch_scenario() {
        let (_dir, state) = test_state();
        register(&state, "alice").await;

        let Json(ack) = send_message(
            State(state.clone()),
            Json(envelope("alice", "bob", "c1", "n1")),
        )
        .await
        .expect("send succeeds");
        assert_eq!(ack, Ack::stored());

        let Json(inbox) = fetch_inbox(Path("alice".to_string()), State(state.clone())).await;
        assert_eq!(inbox, vec![envelope("alice", "bob", "c1", "n1")]);

        // Drain is exactly-once: the second fetch is empty.
        let Json(second) = fetch_inbox(Path("alice".to_string()), State(state)).await;
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn inbox_preserves_send_order_per_recipient() {
        let (_dir, state) = test_state();
        register(&state, "alice").await;
        register(&state, "bob").await;

        for (to, payload) in [("alice", "c1"), ("bob", "x1"), ("alice", "c2")] {
            send_message(
                State(state.clone()),
                Json(envelope(to, "carol", payload, "n")),
            )
            .await
            .expect("send succeeds");
        }

        let Json(inbox) = fetch_inbox(Path("alice".to_string()), State(state.clone())).await;
        let payloads: Vec<&str> = inbox.iter().map(|e| e.box_payload.as_str()).collect();
        assert_eq!(payloads, vec!["c1", "c2"]);

        // Bob's mailbox is untouched by Alice's drain.
        let Json(bobs) = fetch_inbox(Path("bob".to_string()), State(state)).await;
        assert_eq!(bobs.len(), 1);
    }

    #[tokio::test]
    async fn fetch_for_unknown_user_returns_empty_array() {
        let (_dir, state) = test_state();
        let Json(inbox) = fetch_inbox(Path("nobody".to_string()), State(state)).await;
        assert!(inbox.is_empty());
    }
}
