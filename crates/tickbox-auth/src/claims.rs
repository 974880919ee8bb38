//! Session claims and their canonical encoding.
//!
//! Claims are encoded as JSON with a fixed field order (`userId`, `email`,
//! `expiresAt`), so encoding identical claims always yields identical bytes
//! and therefore identical signatures.
//!
//! `expiresAt` is optional. A claim without it never expires. The all-zero
//! timestamp `0001-01-01T00:00:00Z` decodes to the same "no expiry" value
//! rather than to an instant far in the past.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TokenError;

/// The identity carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: Uuid,
    pub email: String,
    #[serde(default, with = "expiry", skip_serializing_if = "expiry::is_unset")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Claims {
    /// Claims that expire at `expires_at`. Issuance always goes through here.
    pub fn new(user_id: Uuid, email: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            email: email.into(),
            expires_at: Some(expires_at),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, TokenError> {
        serde_json::from_slice(bytes).map_err(TokenError::MalformedClaims)
    }

    /// The expiry with the zero timestamp folded into `None`.
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.expires_at.filter(|at| !expiry::is_zero(at))
    }

    /// True only when an expiry is set and lies strictly before `now`. The
    /// zero timestamp counts as unset.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expiry(), Some(at) if at < now)
    }
}

// Equality follows the encoding: a zero expiry equals no expiry.
impl PartialEq for Claims {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
            && self.email == other.email
            && self.expiry() == other.expiry()
    }
}

impl Eq for Claims {}

mod expiry {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    // 0001-01-01T00:00:00Z
    const ZERO_TIME_SECS: i64 = -62_135_596_800;

    pub(super) fn is_zero(at: &DateTime<Utc>) -> bool {
        at.timestamp() == ZERO_TIME_SECS && at.timestamp_subsec_nanos() == 0
    }

    pub(super) fn is_unset(value: &Option<DateTime<Utc>>) -> bool {
        value.as_ref().is_none_or(is_zero)
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) if !is_zero(at) => serializer.serialize_some(at),
            _ => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<DateTime<Utc>>::deserialize(deserializer)?;
        Ok(raw.filter(|at| !is_zero(at)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample() -> Claims {
        Claims::new(
            Uuid::parse_str("6f1c2b9e-3d4a-4c5b-8e7f-0a1b2c3d4e5f").unwrap(),
            "alice@example.com",
            Utc.with_ymd_and_hms(2030, 5, 17, 12, 30, 0).unwrap() + Duration::nanoseconds(123),
        )
    }

    #[test]
    fn test_encode_field_order() {
        let json = String::from_utf8(sample().encode().unwrap()).unwrap();
        let user = json.find("\"userId\"").unwrap();
        let email = json.find("\"email\"").unwrap();
        let exp = json.find("\"expiresAt\"").unwrap();
        assert!(user < email && email < exp);
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(sample().encode().unwrap(), sample().encode().unwrap());
    }

    #[test]
    fn test_roundtrip_preserves_subsecond_expiry() {
        let claims = sample();
        let decoded = Claims::decode(&claims.encode().unwrap()).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_roundtrip_without_expiry() {
        let claims = Claims {
            expires_at: None,
            ..sample()
        };
        let bytes = claims.encode().unwrap();
        assert!(!String::from_utf8_lossy(&bytes).contains("expiresAt"));
        assert_eq!(Claims::decode(&bytes).unwrap(), claims);
    }

    #[test]
    fn test_zero_timestamp_means_no_expiry() {
        let json = br#"{"userId":"6f1c2b9e-3d4a-4c5b-8e7f-0a1b2c3d4e5f","email":"a@b.c","expiresAt":"0001-01-01T00:00:00Z"}"#;
        let claims = Claims::decode(json).unwrap();
        assert_eq!(claims.expires_at, None);
        assert!(!claims.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_in_memory_zero_expiry_is_not_expired() {
        let claims = Claims {
            expires_at: Some(Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap()),
            ..sample()
        };
        assert!(!claims.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_zero_expiry_encodes_as_unset() {
        let claims = Claims {
            expires_at: Some(Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap()),
            ..sample()
        };
        let bytes = claims.encode().unwrap();
        assert!(!String::from_utf8_lossy(&bytes).contains("expiresAt"));

        let decoded = Claims::decode(&bytes).unwrap();
        assert_eq!(decoded.expires_at, None);
        assert_eq!(decoded, claims);
        assert_ne!(
            decoded,
            Claims {
                expires_at: Some(Utc::now()),
                ..sample()
            }
        );
    }

    #[test]
    fn test_null_and_missing_expiry() {
        let null = br#"{"userId":"6f1c2b9e-3d4a-4c5b-8e7f-0a1b2c3d4e5f","email":"a@b.c","expiresAt":null}"#;
        let missing = br#"{"userId":"6f1c2b9e-3d4a-4c5b-8e7f-0a1b2c3d4e5f","email":"a@b.c"}"#;
        assert_eq!(Claims::decode(null).unwrap().expires_at, None);
        assert_eq!(Claims::decode(missing).unwrap().expires_at, None);
    }

    #[test]
    fn test_decode_requires_identity_fields() {
        let no_email = br#"{"userId":"6f1c2b9e-3d4a-4c5b-8e7f-0a1b2c3d4e5f"}"#;
        let bad_uuid = br#"{"userId":"nope","email":"a@b.c"}"#;
        assert!(matches!(
            Claims::decode(no_email),
            Err(TokenError::MalformedClaims(_))
        ));
        assert!(matches!(
            Claims::decode(bad_uuid),
            Err(TokenError::MalformedClaims(_))
        ));
        assert!(matches!(
            Claims::decode(b"\xff\x00"),
            Err(TokenError::MalformedClaims(_))
        ));
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let claims = |at| Claims::new(Uuid::new_v4(), "a@b.c", at);
        assert!(claims(now - Duration::seconds(1)).is_expired_at(now));
        assert!(!claims(now + Duration::hours(1)).is_expired_at(now));
        assert!(!claims(now).is_expired_at(now));
    }
}
