// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use crate::error::ApiError;
use crate::models::{Envelope, UserId};

use super::KeyDirectory;

/// Append/drain queue of encrypted envelopes, keyed by recipient.
///
/// A single append-ordered list backs every mailbox, so per-recipient FIFO
/// order is simply append order. Draining a mailbox removes exactly the
/// envelopes it returns; there is no acknowledgement or redelivery. The
/// caller serializes sends and drains through the store's write lock, which
/// is what makes drain-on-fetch atomic with respect to concurrent sends.
#[derive(Debug, Default)]
pub struct MailboxStore {
    queue: Vec<Envelope>,
}

impl MailboxStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an envelope for later delivery.
    ///
    /// Fails with 404 when the recipient has never registered a public
    /// key; an unregistered recipient could never decrypt the box anyway.
    pub fn send(&mut self, directory: &KeyDirectory, envelope: Envelope) -> Result<(), ApiError> {
        if !directory.contains(&envelope.to) {
            return Err(ApiError::not_found("Recipient not found"));
        }
        self.queue.push(envelope);
        Ok(())
    }

    /// Return and remove every queued envelope addressed to `user_id`, in
    /// send order. A second immediate drain returns nothing.
    pub fn drain_inbox(&mut self, user_id: &UserId) -> Vec<Envelope> {
        let (inbox, rest) = std::mem::take(&mut self.queue)
            .into_iter()
            .partition(|envelope| &envelope.to == user_id);
        self.queue = rest;
        inbox
    }

    /// Number of undelivered envelopes across all mailboxes.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
