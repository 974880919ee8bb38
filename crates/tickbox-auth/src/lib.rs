//! # Tickbox Auth
//!
//! Session token primitives for the Tickbox API.
//!
//! - [`claims`]: the identity payload and its canonical JSON encoding
//! - [`token`]: the `payload.signature` wire container
//! - [`signer`]: HMAC-SHA256 signing and constant-time verification
//! - [`error`]: [`TokenError`]
//!
//! A decoded [`Token`] is untrusted until [`TokenSigner::verify`] accepts it.
//!
//! # Example
//!
//! ```ignore
//! use tickbox_auth::{Claims, Token, TokenSigner};
//!
//! let signer = TokenSigner::from_secret(secret);
//! let wire = signer.create_token(&claims)?;
//!
//! let token = Token::decode(&wire)?;
//! assert!(signer.verify(&token));
//! let claims = Claims::decode(&token.payload)?;
//! ```

pub mod claims;
pub mod error;
pub mod signer;
pub mod token;

pub use claims::Claims;
pub use error::{TokenError, TokenPart};
pub use signer::{KeyProvider, StaticKey, TokenSigner};
pub use token::Token;
