// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Root directory for vault file storage | `./data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `3001` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the vault data directory path.
///
/// Two subdirectories are created under it at startup: `uploads/` for
/// files stored while encryption at rest is disabled, and
/// `uploads_encrypted/` for AEAD frames (suffix `.enc`).
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Default vault data directory when `DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3001;
