// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! File vault: persistence gated on the encryption-at-rest policy.
//!
//! The lookup path on retrieval follows the *current* policy flag, not a
//! per-file marker: a file stored while encryption was on is only findable
//! while encryption stays on. Toggling the flag orphans earlier files
//! until it is toggled back. Clients depend on this exact behavior, so it
//! is pinned by tests rather than fixed.

use std::fs;

use super::codec::{self, VaultKey};
use super::error::{VaultError, VaultResult};
use super::paths::VaultPaths;

/// Suffix appended to storage names of encrypted frames.
pub const ENC_SUFFIX: &str = ".enc";

/// Descriptor for a stored file, returned by [`FileVault::store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Final storage name, including the `.enc` suffix when encrypted.
    pub storage_name: String,
    /// Whether the bytes on disk are an AEAD frame.
    pub encrypted: bool,
}

/// Encrypted-at-rest file store.
///
/// Owns the process vault key and the two on-disk namespaces. The key is
/// generated in [`FileVault::new`] and is read-only afterwards, so the
/// vault itself needs no locking; callers pass the current
/// `encryptionAtRest` flag per operation.
pub struct FileVault {
    key: VaultKey,
    paths: VaultPaths,
}

impl FileVault {
    /// Create a vault rooted at `paths`, generating a fresh key.
    ///
    /// Creates both storage directories. Safe to call on an existing root,
    /// but files encrypted by a previous process are unrecoverable: the
    /// key never leaves the process.
    pub fn new(paths: VaultPaths) -> VaultResult<Self> {
        fs::create_dir_all(paths.plaintext_dir())?;
        fs::create_dir_all(paths.encrypted_dir())?;
        Ok(Self {
            key: VaultKey::generate(),
            paths,
        })
    }

    /// Get the storage paths.
    pub fn paths(&self) -> &VaultPaths {
        &self.paths
    }

    /// Persist `data` under `storage_name` according to the policy flag.
    ///
    /// With encryption on, only the sealed frame ever touches disk; the
    /// plaintext stays in memory. The frame is written under
    /// `storage_name + ".enc"` in the encrypted namespace.
    pub fn store(
        &self,
        storage_name: &str,
        data: &[u8],
        encrypt_at_rest: bool,
    ) -> VaultResult<StoredFile> {
        if !encrypt_at_rest {
            fs::write(self.paths.plaintext_file(storage_name), data)?;
            return Ok(StoredFile {
                storage_name: storage_name.to_string(),
                encrypted: false,
            });
        }

        let frame = codec::seal(&self.key, data)?;
        let final_name = format!("{storage_name}{ENC_SUFFIX}");
        fs::write(self.paths.encrypted_file(&final_name), frame)?;
        Ok(StoredFile {
            storage_name: final_name,
            encrypted: true,
        })
    }

    /// Fetch and (if needed) decrypt the file stored under `storage_name`.
    ///
    /// The policy flag selects the namespace: plaintext lookups strip any
    /// `.enc` suffix from the requested name, encrypted lookups use it
    /// verbatim. The name arrives from the request path and is treated as
    /// hostile: anything the server would never have assigned (path
    /// separators, `..`) is rejected before it reaches the filesystem, so
    /// a lookup can never escape the two vault namespaces.
    pub fn retrieve(&self, storage_name: &str, encrypt_at_rest: bool) -> VaultResult<Vec<u8>> {
        if !is_safe_storage_name(storage_name) {
            return Err(if encrypt_at_rest {
                VaultError::EncryptedFileNotFound
            } else {
                VaultError::FileNotFound
            });
        }

        if !encrypt_at_rest {
            let plain_name = storage_name.trim_end_matches(ENC_SUFFIX);
            let path = self.paths.plaintext_file(plain_name);
            if !path.is_file() {
                return Err(VaultError::FileNotFound);
            }
            return Ok(fs::read(path)?);
        }

        let path = self.paths.encrypted_file(storage_name);
        if !path.is_file() {
            return Err(VaultError::EncryptedFileNotFound);
        }
        let frame = fs::read(path)?;
        codec::open(&self.key, &frame)
    }
}

/// Server-assigned names are UUID hex plus an optional `.enc` suffix;
/// any separator or dot-segment in a requested name is a traversal
/// attempt, not a miss.
fn is_safe_storage_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}
