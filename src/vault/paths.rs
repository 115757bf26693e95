// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Path constants and utilities for the vault storage layout.

use std::path::{Path, PathBuf};

/// Directory name for files stored while encryption at rest is disabled.
pub const PLAINTEXT_DIR: &str = "uploads";

/// Directory name for AEAD frames (files carry a `.enc` suffix).
pub const ENCRYPTED_DIR: &str = "uploads_encrypted";

/// Storage path utilities for the vault's two on-disk namespaces.
#[derive(Debug, Clone)]
pub struct VaultPaths {
    root: PathBuf,
}

impl VaultPaths {
    /// Create a new VaultPaths with the given root (useful for testing).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory for all vault data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory containing plaintext files.
    pub fn plaintext_dir(&self) -> PathBuf {
        self.root.join(PLAINTEXT_DIR)
    }

    /// Directory containing encrypted frames.
    pub fn encrypted_dir(&self) -> PathBuf {
        self.root.join(ENCRYPTED_DIR)
    }

    /// Path to a plaintext file by storage name.
    pub fn plaintext_file(&self, storage_name: &str) -> PathBuf {
        self.plaintext_dir().join(storage_name)
    }

    /// Path to an encrypted frame by storage name (caller supplies the
    /// `.enc` suffix; the vault assigns it at store time).
    pub fn encrypted_file(&self, storage_name: &str) -> PathBuf {
        self.encrypted_dir().join(storage_name)
    }
}
