//! Errors for parsing scheme and role names at text boundaries.

use thiserror::Error;

/// A scheme name that is not one of the six harmony rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    #[error("unknown color scheme: {0:?}")]
    UnknownScheme(String),
}

/// A role name that is not one of the five palette roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    #[error("unknown palette role: {0:?}")]
    UnknownRole(String),
}
