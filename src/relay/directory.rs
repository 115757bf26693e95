// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::collections::HashMap;

use crate::models::UserId;

/// In-memory public-key directory.
///
/// Keys are opaque text declared by the client; the server performs no
/// format validation. Registration is idempotent-by-overwrite and records
/// are never deleted.
#[derive(Debug, Default)]
pub struct KeyDirectory {
    keys: HashMap<UserId, String>,
}

impl KeyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a public key, unconditionally overwriting any existing
    /// record for the user.
    pub fn register(&mut self, user_id: UserId, public_key: String) {
        self.keys.insert(user_id, public_key);
    }

    /// Look up a user's declared public key.
    pub fn lookup(&self, user_id: &UserId) -> Option<&str> {
        self.keys.get(user_id).map(String::as_str)
    }

    /// Whether the user has ever registered a key.
    pub fn contains(&self, user_id: &UserId) -> bool {
        self.keys.contains_key(user_id)
    }
}
