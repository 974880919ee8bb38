//! Errors produced while building, encoding or decoding session tokens.

use std::fmt;

use thiserror::Error;

/// Which half of a wire token failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPart {
    Payload,
    Signature,
}

impl fmt::Display for TokenPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPart::Payload => f.write_str("payload"),
            TokenPart::Signature => f.write_str("signature"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// The wire string has no `.` separator.
    #[error("invalid token format")]
    InvalidTokenFormat,

    #[error("invalid base64url in token {part}")]
    InvalidTokenEncoding {
        part: TokenPart,
        #[source]
        source: base64::DecodeError,
    },

    /// The verified payload is not a valid claims encoding.
    #[error("malformed token claims")]
    MalformedClaims(#[source] serde_json::Error),

    #[error("failed to serialize token claims")]
    SigningFailed(#[source] serde_json::Error),
}
