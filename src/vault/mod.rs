// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Encrypted File Vault Module
//!
//! This module stores uploaded files, optionally AEAD-encrypted at rest
//! with AES-256-GCM under a single process-lifetime key.
//!
//! ## Storage Layout
//!
//! ```text
//! <DATA_DIR>/
//!   uploads/
//!     {storage_name}          # plaintext files (encryption at rest off)
//!   uploads_encrypted/
//!     {storage_name}.enc      # AEAD frames (encryption at rest on)
//! ```
//!
//! ## Frame Format
//!
//! Encrypted files use a fixed byte layout:
//!
//! ```text
//! IV[16] || authTag[16] || ciphertext[N]
//! ```
//!
//! A fresh random IV is generated for every encryption. IV reuse under the
//! same key breaks GCM, so IVs are never derived or counted, only drawn
//! from the OS RNG.
//!
//! ## Key Lifecycle
//!
//! The vault key is generated when the vault is constructed and is never
//! persisted or rotated. Restarting the process permanently orphans every
//! previously encrypted file. Known gap, inherited from the deployments
//! this service replaces; key durability is a deliberate non-feature until
//! a key-escrow story exists.

pub mod codec;
pub mod error;
pub mod paths;
pub mod store;

pub use codec::{VaultKey, IV_SIZE, KEY_SIZE, TAG_SIZE};
pub use error::{VaultError, VaultResult};
pub use paths::VaultPaths;
pub use store::{FileVault, StoredFile, ENC_SUFFIX};
