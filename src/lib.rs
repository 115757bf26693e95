// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Sealbox - E2EE Message Relay & Encrypted File Vault
//!
//! This crate provides a relay for end-to-end-encrypted message envelopes
//! (the server only ever stores opaque ciphertext) together with a file
//! vault that transparently AEAD-encrypts uploads at rest.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `relay` - Public-key directory and mailbox queues
//! - `vault` - Encrypted-at-rest file storage (AES-256-GCM)

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod relay;
pub mod state;
pub mod vault;
