// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Settings;
use crate::relay::{KeyDirectory, MailboxStore};
use crate::vault::FileVault;

/// Shared application state handed to every request handler.
///
/// The directory, mailbox, and settings each sit behind their own lock so
/// a long file operation never blocks message traffic. The vault itself is
/// immutable after startup (its key is generated once and only read).
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<KeyDirectory>>,
    pub mailbox: Arc<RwLock<MailboxStore>>,
    pub settings: Arc<RwLock<Settings>>,
    pub vault: Arc<FileVault>,
}

impl AppState {
    pub fn new(vault: FileVault) -> Self {
        Self {
            directory: Arc::new(RwLock::new(KeyDirectory::new())),
            mailbox: Arc::new(RwLock::new(MailboxStore::new())),
            settings: Arc::new(RwLock::new(Settings::default())),
            vault: Arc::new(vault),
        }
    }
}
