use base64::{Engine, engine::general_purpose::URL_SAFE};
use chrono::{Duration, TimeZone, Utc};
use tickbox_auth::{Claims, Token, TokenError, TokenPart, TokenSigner};
use uuid::Uuid;

const SECRET: &str = "test-secret-key-at-least-32-characters-long";

fn claims() -> Claims {
    Claims::new(
        Uuid::new_v4(),
        "alice@example.com",
        Utc.with_ymd_and_hms(2031, 1, 1, 0, 0, 0).unwrap(),
    )
}

#[test]
fn test_create_token_shape() {
    let wire = TokenSigner::from_secret(SECRET)
        .create_token(&claims())
        .unwrap();

    let (payload, signature) = wire.split_once('.').unwrap();
    assert!(!payload.is_empty());
    assert_eq!(URL_SAFE.decode(signature).unwrap().len(), 32);
    assert!(!wire.contains('+') && !wire.contains('/'));
}

#[test]
fn test_payload_is_claims_json() {
    let c = claims();
    let wire = TokenSigner::from_secret(SECRET).create_token(&c).unwrap();

    let token = Token::decode(&wire).unwrap();
    assert_eq!(Claims::decode(&token.payload).unwrap(), c);
}

#[test]
fn test_signing_is_deterministic() {
    let signer = TokenSigner::from_secret(SECRET);
    let c = claims();

    assert_eq!(
        signer.create_token(&c).unwrap(),
        signer.create_token(&c).unwrap()
    );
}

#[test]
fn test_payload_change_changes_signature() {
    let signer = TokenSigner::from_secret(SECRET);
    let a = signer.sign(Token::unsigned(b"payload-a".to_vec()));
    let b = signer.sign(Token::unsigned(b"payload-b".to_vec()));

    assert_ne!(a.signature, b.signature);
}

#[test]
fn test_verify_rejects_swapped_signature() {
    let signer = TokenSigner::from_secret(SECRET);
    let a = signer.sign(Token::unsigned(b"payload-a".to_vec()));
    let b = signer.sign(Token::unsigned(b"payload-b".to_vec()));

    let mixed = Token {
        payload: a.payload.clone(),
        signature: b.signature.clone(),
    };
    assert!(signer.verify(&a));
    assert!(!signer.verify(&mixed));
}

#[test]
fn test_verify_rejects_truncated_signature() {
    let signer = TokenSigner::from_secret(SECRET);
    let mut token = signer.sign(Token::unsigned(b"payload".to_vec()));
    token.signature.truncate(16);

    assert!(!signer.verify(&token));
    assert!(!signer.verify(&Token::unsigned(b"payload".to_vec())));
}

#[test]
fn test_decode_errors_name_the_part() {
    assert!(matches!(
        Token::decode("missing-separator"),
        Err(TokenError::InvalidTokenFormat)
    ));
    assert!(matches!(
        Token::decode("!!!.AAAA"),
        Err(TokenError::InvalidTokenEncoding {
            part: TokenPart::Payload,
            ..
        })
    ));
    assert!(matches!(
        Token::decode("AAAA.!!!"),
        Err(TokenError::InvalidTokenEncoding {
            part: TokenPart::Signature,
            ..
        })
    ));
}

#[test]
fn test_empty_parts_decode() {
    let token = Token::decode(".").unwrap();
    assert!(token.payload.is_empty());
    assert!(token.signature.is_empty());
}

#[test]
fn test_expiry_check() {
    let now = Utc::now();
    let past = Claims::new(Uuid::new_v4(), "a@b.c", now - Duration::seconds(1));
    let future = Claims::new(Uuid::new_v4(), "a@b.c", now + Duration::hours(1));

    assert!(past.is_expired_at(now));
    assert!(!future.is_expired_at(now));
}
