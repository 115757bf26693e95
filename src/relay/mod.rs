// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Message Relay Module
//!
//! In-memory building blocks for the encrypted message relay:
//!
//! - [`KeyDirectory`] maps user identifiers to their declared public key,
//!   last write wins.
//! - [`MailboxStore`] queues opaque envelopes until the recipient drains
//!   them; an envelope is delivered at most once.
//!
//! Neither structure persists anything. Both live for the process lifetime
//! only, by design: the relay is a forwarding buffer, not a message
//! archive.

pub mod directory;
pub mod mailbox;

pub use directory::KeyDirectory;
pub use mailbox::MailboxStore;
