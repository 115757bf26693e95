// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize`, `Deserialize`, and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.
//!
//! ## User Identifier Type
//!
//! The [`UserId`] newtype wraps the opaque client-chosen identifier that
//! keys the public-key directory and mailbox queues. It provides type
//! safety and clear semantics.
//!
//! ## Wire Format
//!
//! Field names are camelCase on the wire (`userId`, `publicKey`,
//! `originalName`, `encryptionAtRest`), matching the clients this service
//! was built for. Envelope ciphertext and nonces are opaque text; the
//! server never inspects or decodes them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// User Identifier Type
// =============================================================================

/// Client-chosen user identifier.
///
/// Provides type safety for user identifiers throughout the API. The
/// server attaches no meaning to the contents beyond equality.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

// =============================================================================
// Key Directory Models
// =============================================================================

/// Request to register (or overwrite) a user's public key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterKeyRequest {
    /// The user the key belongs to.
    pub user_id: UserId,
    /// The declared public key, as opaque text. Not validated.
    pub public_key: String,
}

/// Generic acknowledgement body (`{"status": "..."}`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Ack {
    /// Human-readable outcome, e.g. `ok` or `message stored`.
    pub status: String,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    pub fn stored() -> Self {
        Self {
            status: "message stored".to_string(),
        }
    }
}

// =============================================================================
// Envelope Models
// =============================================================================

/// One opaque, server-unreadable message unit forwarded between two clients.
///
/// The `box` payload is ciphertext produced client-side (e.g. a NaCl box);
/// the server stores and forwards it without inspection. An envelope is
/// removed from its mailbox by the same fetch that returns it, so it is
/// delivered at most once.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Envelope {
    /// Recipient identifier. Must be registered in the key directory.
    pub to: UserId,
    /// Sender identifier. Not authenticated by the server.
    pub from: UserId,
    /// Opaque ciphertext. `box` is a Rust keyword, hence the rename.
    #[serde(rename = "box")]
    pub box_payload: String,
    /// Opaque nonce the ciphertext was produced with.
    pub nonce: String,
}

// =============================================================================
// Vault Models
// =============================================================================

/// Response to a successful file upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Server-assigned storage name; carries a `.enc` suffix when the
    /// file was encrypted at rest.
    pub filename: String,
    /// Client-supplied original name. Untrusted data.
    pub original_name: String,
}

// =============================================================================
// Settings Models
// =============================================================================

/// Process-wide feature flags.
///
/// Mutated only through [`Settings::toggle`]; effects are visible to the
/// next upload/download immediately. Not persisted across restarts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// When enabled, uploads are AEAD-encrypted before touching disk and
    /// downloads are decrypted (or hard-fail) on the way out.
    pub encryption_at_rest: bool,
    /// Placeholder for peer discovery. Never read by any code path.
    pub p2p_discovery: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            encryption_at_rest: true,
            p2p_discovery: false,
        }
    }
}

impl Settings {
    /// Flip the named flag and return the updated snapshot.
    ///
    /// Unrecognized keys are a silent no-op: the unchanged snapshot is
    /// returned, matching the behavior clients already rely on.
    pub fn toggle(&mut self, key: &str) -> Settings {
        match key {
            "encryptionAtRest" => self.encryption_at_rest = !self.encryption_at_rest,
            "p2pDiscovery" => self.p2p_discovery = !self.p2p_discovery,
            _ => {}
        }
        *self
    }
}

/// Request to toggle a settings flag.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToggleSettingRequest {
    /// Wire name of the flag, e.g. `encryptionAtRest`.
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_from_and_into_string() {
        let from_str: UserId = "abc".into();
        assert_eq!(from_str.0, "abc");

        let from_string: UserId = String::from("def").into();
        assert_eq!(from_string.0, "def");

        let to_string: String = UserId("ghi".into()).into();
        assert_eq!(to_string, "ghi");
    }

    #[test]
    fn envelope_serializes_box_field_name() {
        let envelope = Envelope {
            to: "alice".into(),
            from: "bob".into(),
            box_payload: "c1".into(),
            nonce: "n1".into(),
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"to": "alice", "from": "bob", "box": "c1", "nonce": "n1"})
        );
    }

    #[test]
    fn settings_default_and_wire_names() {
        let settings = Settings::default();
        assert!(settings.encryption_at_rest);
        assert!(!settings.p2p_discovery);

        let json = serde_json::to_value(settings).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"encryptionAtRest": true, "p2pDiscovery": false})
        );
    }

    #[test]
    fn toggle_is_idempotent_over_two_calls() {
        let mut settings = Settings::default();
        let first = settings.toggle("encryptionAtRest");
        assert!(!first.encryption_at_rest);
        let second = settings.toggle("encryptionAtRest");
        assert!(second.encryption_at_rest);
        assert_eq!(second, Settings::default());
    }

    #[test]
    fn toggle_unknown_key_is_a_no_op() {
        let mut settings = Settings::default();
        let snapshot = settings.toggle("telemetry");
        assert_eq!(snapshot, Settings::default());
        assert_eq!(settings, Settings::default());
    }
}
