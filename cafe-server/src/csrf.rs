//! Form token signing
//!
//! Every rendered form carries a hidden `csrf_token`. A token is the issue
//! time in unix seconds and an HMAC-SHA256 of that time keyed with
//! `SECRET_KEY`, joined as `<unix>.<hex>`. Tokens expire after the
//! configured time limit.

use std::time::Duration;

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

use crate::utils::{AppError, AppResult, ErrorCode};

type HmacSha256 = Hmac<Sha256>;

/// Tokens stamped this far in the future are still accepted
const CLOCK_SKEW_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsrfError {
    #[error("The CSRF token is missing.")]
    Missing,

    #[error("The CSRF token is malformed.")]
    Malformed,

    #[error("The CSRF token is invalid.")]
    BadSignature,

    #[error("The CSRF token has expired.")]
    Expired,
}

impl From<CsrfError> for AppError {
    fn from(err: CsrfError) -> Self {
        let code = match err {
            CsrfError::Missing => ErrorCode::CsrfTokenMissing,
            _ => ErrorCode::CsrfTokenInvalid,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Issues and verifies signed form tokens
#[derive(Clone)]
pub struct CsrfGuard {
    mac: HmacSha256,
    time_limit: Duration,
}

impl CsrfGuard {
    pub fn new(secret: &[u8], time_limit: Duration) -> AppResult<Self> {
        if secret.is_empty() {
            return Err(AppError::config("SECRET_KEY must not be empty"));
        }
        let mac = HmacSha256::new_from_slice(secret)
            .map_err(|e| AppError::config(format!("Invalid SECRET_KEY: {e}")))?;
        Ok(Self { mac, time_limit })
    }

    /// Fresh token for a rendered form
    pub fn issue(&self) -> String {
        self.issue_at(Utc::now().timestamp())
    }

    /// Check a submitted token against the secret and the time limit
    pub fn verify(&self, token: Option<&str>) -> Result<(), CsrfError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    fn issue_at(&self, issued_at: i64) -> String {
        format!("{issued_at}.{}", hex::encode(self.sign(issued_at)))
    }

    fn verify_at(&self, token: Option<&str>, now: i64) -> Result<(), CsrfError> {
        let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or(CsrfError::Missing)?;

        let (stamp, signature) = token.split_once('.').ok_or(CsrfError::Malformed)?;
        let issued_at: i64 = stamp.parse().map_err(|_| CsrfError::Malformed)?;
        let signature = hex::decode(signature).map_err(|_| CsrfError::Malformed)?;

        let mut mac = self.mac.clone();
        mac.update(issued_at.to_string().as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| CsrfError::BadSignature)?;

        let limit = i64::try_from(self.time_limit.as_secs()).unwrap_or(i64::MAX);
        if issued_at > now.saturating_add(CLOCK_SKEW_SECS) || now.saturating_sub(issued_at) > limit {
            return Err(CsrfError::Expired);
        }
        Ok(())
    }

    fn sign(&self, issued_at: i64) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(issued_at.to_string().as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

impl std::fmt::Debug for CsrfGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsrfGuard")
            .field("time_limit", &self.time_limit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn guard() -> CsrfGuard {
        CsrfGuard::new(b"test-secret", Duration::from_secs(3600)).unwrap()
    }

    #[test]
    fn test_issued_token_verifies() {
        let g = guard();
        let token = g.issue();
        assert_eq!(g.verify(Some(&token)), Ok(()));
    }

    #[test]
    fn test_missing_token() {
        let g = guard();
        assert_eq!(g.verify_at(None, NOW), Err(CsrfError::Missing));
        assert_eq!(g.verify_at(Some("  "), NOW), Err(CsrfError::Missing));
    }

    #[test]
    fn test_malformed_token() {
        let g = guard();
        assert_eq!(g.verify_at(Some("no-dot"), NOW), Err(CsrfError::Malformed));
        assert_eq!(g.verify_at(Some("abc.00ff"), NOW), Err(CsrfError::Malformed));
        assert_eq!(g.verify_at(Some("123.zz"), NOW), Err(CsrfError::Malformed));
    }

    #[test]
    fn test_tampered_signature() {
        let g = guard();
        let token = g.issue_at(NOW);
        let (stamp, _) = token.split_once('.').unwrap();
        let forged = format!("{stamp}.{}", "00".repeat(32));
        assert_eq!(g.verify_at(Some(&forged), NOW), Err(CsrfError::BadSignature));

        // Moving the timestamp invalidates the signature
        let (_, sig) = token.split_once('.').unwrap();
        let shifted = format!("{}.{sig}", NOW + 100);
        assert_eq!(g.verify_at(Some(&shifted), NOW), Err(CsrfError::BadSignature));
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = guard().issue_at(NOW);
        let other = CsrfGuard::new(b"another-secret", Duration::from_secs(3600)).unwrap();
        assert_eq!(other.verify_at(Some(&token), NOW), Err(CsrfError::BadSignature));
    }

    #[test]
    fn test_expiry() {
        let g = guard();
        let token = g.issue_at(NOW);
        assert_eq!(g.verify_at(Some(&token), NOW + 3600), Ok(()));
        assert_eq!(g.verify_at(Some(&token), NOW + 3601), Err(CsrfError::Expired));
    }

    #[test]
    fn test_future_token_beyond_skew() {
        let g = guard();
        let token = g.issue_at(NOW + CLOCK_SKEW_SECS + 1);
        assert_eq!(g.verify_at(Some(&token), NOW), Err(CsrfError::Expired));
        let token = g.issue_at(NOW + CLOCK_SKEW_SECS);
        assert_eq!(g.verify_at(Some(&token), NOW), Ok(()));
    }

    #[test]
    fn test_empty_secret_rejected() {
        let err = CsrfGuard::new(b"", Duration::from_secs(60)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::from(CsrfError::Missing).code, ErrorCode::CsrfTokenMissing);
        assert_eq!(AppError::from(CsrfError::Expired).code, ErrorCode::CsrfTokenInvalid);
    }
}
