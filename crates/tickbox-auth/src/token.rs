//! The session token wire container.
//!
//! Wire form: `base64url(payload) "." base64url(signature)` using the padded
//! URL-safe alphabet. The alphabet never produces `.`, so the first separator
//! splits the two parts.

use std::fmt;
use std::str::FromStr;

use base64::{Engine, engine::general_purpose::URL_SAFE};

use crate::error::{TokenError, TokenPart};

pub const SEPARATOR: char = '.';

/// Encoded claims plus the MAC over them.
///
/// Decoding a wire string performs no verification; the signature is only a
/// claim until [`TokenSigner::verify`](crate::TokenSigner::verify) checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub payload: Vec<u8>,
    pub signature: Vec<u8>,
}

impl Token {
    /// A token with an empty signature, ready for signing.
    pub fn unsigned(payload: Vec<u8>) -> Self {
        Self {
            payload,
            signature: Vec::new(),
        }
    }

    /// The base64url form of the payload; this string is what gets signed.
    pub fn encoded_payload(&self) -> String {
        URL_SAFE.encode(&self.payload)
    }

    pub fn encode(&self) -> String {
        format!(
            "{}{}{}",
            self.encoded_payload(),
            SEPARATOR,
            URL_SAFE.encode(&self.signature)
        )
    }

    pub fn decode(wire: &str) -> Result<Self, TokenError> {
        let (payload, signature) = wire
            .split_once(SEPARATOR)
            .ok_or(TokenError::InvalidTokenFormat)?;

        let payload = URL_SAFE
            .decode(payload)
            .map_err(|source| TokenError::InvalidTokenEncoding {
                part: TokenPart::Payload,
                source,
            })?;
        let signature =
            URL_SAFE
                .decode(signature)
                .map_err(|source| TokenError::InvalidTokenEncoding {
                    part: TokenPart::Signature,
                    source,
                })?;

        Ok(Self { payload, signature })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_roundtrip() {
        let token = Token {
            payload: br#"{"userId":"x"}"#.to_vec(),
            signature: vec![0xfb, 0xff, 0x00, 0x3e],
        };
        let wire = token.encode();
        assert_eq!(wire.matches(SEPARATOR).count(), 1);
        assert_eq!(Token::decode(&wire).unwrap(), token);
    }

    #[test]
    fn test_url_safe_alphabet() {
        let token = Token {
            payload: vec![0xfb, 0xef, 0xff],
            signature: vec![0xfe],
        };
        let wire = token.to_string();
        assert!(!wire.contains('+') && !wire.contains('/'));
        assert_eq!(wire, "--__._g==");
    }

    #[test]
    fn test_empty_parts() {
        let token = Token::decode(".").unwrap();
        assert!(token.payload.is_empty());
        assert!(token.signature.is_empty());
        assert_eq!(Token::unsigned(Vec::new()).encode(), ".");
    }

    #[test]
    fn test_missing_separator() {
        assert!(matches!(
            Token::decode("bm8tc2VwYXJhdG9y"),
            Err(TokenError::InvalidTokenFormat)
        ));
        assert!(matches!(
            Token::decode(""),
            Err(TokenError::InvalidTokenFormat)
        ));
    }

    #[test]
    fn test_first_separator_wins() {
        // "YQ==" then "Yg==.Yw==" which is not valid base64 because of the dot
        let err = Token::decode("YQ==.Yg==.Yw==").unwrap_err();
        assert!(matches!(
            err,
            TokenError::InvalidTokenEncoding {
                part: TokenPart::Signature,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_encoding_reports_part() {
        assert!(matches!(
            Token::decode("!!!!.YQ=="),
            Err(TokenError::InvalidTokenEncoding {
                part: TokenPart::Payload,
                ..
            })
        ));
        assert!(matches!(
            Token::decode("YQ==.a+b/"),
            Err(TokenError::InvalidTokenEncoding {
                part: TokenPart::Signature,
                ..
            })
        ));
    }

    #[test]
    fn test_from_str() {
        let token: Token = "YQ==.Yg==".parse().unwrap();
        assert_eq!(token.payload, b"a");
        assert_eq!(token.signature, b"b");
    }
}
