// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Crate-level error type.

use crate::cdr::CdrError;

/// Errors returned by the public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed `"major.minor"` version string.
    Format(String),
    /// A version component is not a decimal octet.
    NumberFormat(String),
    /// Truncated or malformed CDR data.
    Marshal(CdrError),
    /// Stringified reference without the `IOR:` prefix or with bad hex.
    InvalidIorString(String),
    /// Invalid ORB configuration value.
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(msg) => write!(f, "Invalid version format: {}", msg),
            Self::NumberFormat(msg) => write!(f, "Invalid version number: {}", msg),
            Self::Marshal(err) => write!(f, "Marshal error: {}", err),
            Self::InvalidIorString(msg) => write!(f, "Invalid IOR string: {}", msg),
            Self::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Marshal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CdrError> for Error {
    fn from(err: CdrError) -> Self {
        Error::Marshal(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marshal_error_keeps_source() {
        let err: Error = CdrError::InvalidData {
            reason: "bad flag".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Marshal error: invalid data: bad flag");
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&Error::Format("1".into())).is_none());
    }
}
