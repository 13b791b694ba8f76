// SPDX-License-Identifier: MIT
//
// Codec errors.

use thiserror::Error;

/// Errors produced while decoding color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input did not match `#?[0-9a-fA-F]{6}`.
    #[error("invalid color format: {0:?} (expected #rrggbb)")]
    InvalidColorFormat(String),
}
