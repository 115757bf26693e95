// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! AES-256-GCM framing for at-rest file encryption.
//!
//! The on-disk frame is `IV[16] || authTag[16] || ciphertext[N]`. The tag
//! sits between IV and ciphertext (not appended) so the layout stays
//! byte-compatible with the frames existing deployments already hold.
//!
//! ## Security Notes
//!
//! - The key is zeroized on drop and never printed
//! - IVs are drawn fresh from the OS RNG for every encryption
//! - NEVER reuse an IV with the same key

use aes_gcm::{
    aead::{consts::U16, AeadInPlace},
    aes::Aes256,
    AesGcm, Key, KeyInit, Nonce, Tag,
};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::error::{VaultError, VaultResult};

/// Size of the vault key in bytes (256 bits).
pub const KEY_SIZE: usize = 32;

/// Size of the per-file initialization vector in bytes.
pub const IV_SIZE: usize = 16;

/// Size of the GCM authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// AES-256-GCM parameterized for the 16-byte IVs the frame format uses.
type VaultCipher = AesGcm<Aes256, U16>;

/// The single symmetric key all at-rest files are encrypted under.
///
/// Generated once per process lifetime, never rotated, never persisted.
/// Zeroized when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct VaultKey {
    bytes: [u8; KEY_SIZE],
}

impl VaultKey {
    /// Generate a new random vault key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Create a key from raw bytes (exact-size, used by tests).
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    fn as_key(&self) -> &Key<VaultCipher> {
        Key::<VaultCipher>::from_slice(&self.bytes)
    }
}

impl std::fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VaultKey([REDACTED])")
    }
}

/// Encrypt `plaintext` into a fresh `IV || tag || ciphertext` frame.
pub fn seal(key: &VaultKey, plaintext: &[u8]) -> VaultResult<Vec<u8>> {
    let cipher = VaultCipher::new(key.as_key());

    let mut iv = [0u8; IV_SIZE];
    OsRng.fill_bytes(&mut iv);

    let mut ciphertext = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&iv), b"", &mut ciphertext)
        .map_err(|_| VaultError::EncryptionFailed)?;

    let mut frame = Vec::with_capacity(IV_SIZE + TAG_SIZE + ciphertext.len());
    frame.extend_from_slice(&iv);
    frame.extend_from_slice(&tag);
    frame.extend_from_slice(&ciphertext);
    Ok(frame)
}

/// Decrypt a frame produced by [`seal`], verifying the authentication tag.
///
/// Fails with [`VaultError::DecryptionFailed`] on truncation, tampering,
/// or a wrong key. Never returns partial plaintext.
pub fn open(key: &VaultKey, frame: &[u8]) -> VaultResult<Vec<u8>> {
    if frame.len() < IV_SIZE + TAG_SIZE {
        return Err(VaultError::DecryptionFailed);
    }

    let (iv, rest) = frame.split_at(IV_SIZE);
    let (tag, ciphertext) = rest.split_at(TAG_SIZE);

    let cipher = VaultCipher::new(key.as_key());
    let mut plaintext = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(iv),
            b"",
            &mut plaintext,
            Tag::from_slice(tag),
        )
        .map_err(|_| VaultError::DecryptionFailed)?;

    Ok(plaintext)
}
