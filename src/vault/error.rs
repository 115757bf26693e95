// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::io;

/// Error type for vault operations.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    /// Plaintext lookup missed (encryption at rest currently off).
    #[error("file not found")]
    FileNotFound,

    /// Encrypted lookup missed (encryption at rest currently on).
    #[error("encrypted file not found")]
    EncryptedFileNotFound,

    /// Authentication-tag mismatch or malformed frame. Tampered data,
    /// wrong key, or truncation; the distinction is deliberately not
    /// exposed.
    #[error("decryption failed")]
    DecryptionFailed,

    /// Cipher refused the plaintext (only reachable at absurd sizes).
    #[error("encryption failed")]
    EncryptionFailed,

    /// I/O error during file operations.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for vault operations.
pub type VaultResult<T> = Result<T, VaultError>;
