//! HMAC-SHA256 token signing.
//!
//! The MAC is computed over the base64url form of the payload, not over the
//! raw bytes, and the result is the 32-byte digest stored in
//! [`Token::signature`]. Verification recomputes the digest and compares it in
//! constant time.
//!
//! The signing key is obtained through [`KeyProvider`]. [`StaticKey`] holds a
//! single process-wide secret loaded at startup.

use std::fmt;
use std::sync::Arc;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::claims::Claims;
use crate::error::TokenError;
use crate::token::Token;

type HmacSha256 = Hmac<Sha256>;

/// Supplies the shared secret used for signing and verification.
pub trait KeyProvider: Send + Sync {
    fn signing_key(&self) -> &[u8];
}

/// An immutable secret held for the lifetime of the process.
#[derive(Clone)]
pub struct StaticKey(Vec<u8>);

impl StaticKey {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }
}

impl KeyProvider for StaticKey {
    fn signing_key(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for StaticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticKey(<redacted>)")
    }
}

/// Signs and verifies session tokens. Cheap to clone; clones share the key.
#[derive(Clone)]
pub struct TokenSigner {
    keys: Arc<dyn KeyProvider>,
}

impl TokenSigner {
    pub fn new<K>(keys: K) -> Self
    where
        K: KeyProvider + 'static,
    {
        Self {
            keys: Arc::new(keys),
        }
    }

    pub fn from_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self::new(StaticKey::new(secret))
    }

    fn keyed_mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.keys.signing_key())
            .expect("HMAC can take key of any size")
    }

    fn mac_for(&self, token: &Token) -> Vec<u8> {
        let mut mac = self.keyed_mac();
        mac.update(token.encoded_payload().as_bytes());
        mac.finalize().into_bytes().to_vec()
    }

    /// Replaces the token's signature with the MAC of its payload.
    pub fn sign(&self, mut token: Token) -> Token {
        token.signature = self.mac_for(&token);
        token
    }

    /// Returns whether the token's signature matches its payload.
    ///
    /// Any length or content mismatch yields `false`.
    pub fn verify(&self, token: &Token) -> bool {
        self.mac_for(token)
            .as_slice()
            .ct_eq(token.signature.as_slice())
            .into()
    }

    /// Encodes, signs and wire-encodes `claims`.
    pub fn create_token(&self, claims: &Claims) -> Result<String, TokenError> {
        let payload = claims.encode().map_err(TokenError::SigningFailed)?;
        Ok(self.sign(Token::unsigned(payload)).encode())
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner").finish_non_exhaustive()
    }
}
