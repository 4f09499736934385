//! # CSRF Tokens
//!
//! Signed, expiring tokens for the spam confirmation form.
//!
//! A token is `issued_at.nonce.signature`. `issued_at` is Unix seconds,
//! the nonce and signature are URL-safe base64 without padding, and
//! `signature = SHA-256(secret || issued_at || "." || nonce)`.
//!
//! The listing page hands the same token out twice: in the form's hidden
//! field and in a `SameSite=Strict` cookie scoped to the spam pages. A
//! confirmation is accepted only when both copies are present, equal, and
//! carry a valid, unexpired signature (double-submit).

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::errors::{AdminError, AdminResult};

/// Form field carrying the token
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Cookie carrying the second copy of the token
pub const CSRF_COOKIE: &str = "csrftoken";

/// Default token lifetime
pub const DEFAULT_MAX_AGE_SECS: i64 = 3600;

const NONCE_BYTES: usize = 16;

/// Tolerated clock skew for tokens stamped slightly in the future
const MAX_SKEW_SECS: i64 = 60;

/// Issues and verifies CSRF tokens under one secret
pub struct CsrfGuard {
    secret: Vec<u8>,
    max_age_secs: i64,
}

impl CsrfGuard {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            secret: secret.to_vec(),
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }

    /// Guard with a fresh 256-bit random secret
    pub fn random() -> Self {
        let mut secret = [0u8; 32];
        OsRng.fill_bytes(&mut secret);
        Self::new(&secret)
    }

    pub fn with_max_age(mut self, secs: i64) -> Self {
        self.max_age_secs = secs;
        self
    }

    pub fn max_age_secs(&self) -> i64 {
        self.max_age_secs
    }

    /// Issue a new token stamped with the current time
    pub fn issue(&self) -> String {
        self.issue_at(Utc::now())
    }

    /// Issue a token stamped with `now`
    pub fn issue_at(&self, now: DateTime<Utc>) -> String {
        let mut nonce = [0u8; NONCE_BYTES];
        OsRng.fill_bytes(&mut nonce);
        let nonce = URL_SAFE_NO_PAD.encode(nonce);
        let issued_at = now.timestamp().to_string();
        let signature = self.sign(&issued_at, &nonce);
        format!("{}.{}.{}", issued_at, nonce, signature)
    }

    /// Verify a token previously issued by this guard
    pub fn verify(&self, token: &str) -> AdminResult<()> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as of `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AdminResult<()> {
        let mut parts = token.splitn(3, '.');
        let (issued_at, nonce, signature) = match (parts.next(), parts.next(), parts.next()) {
            (Some(i), Some(n), Some(s)) if !i.is_empty() && !n.is_empty() && !s.is_empty() => {
                (i, n, s)
            }
            _ => return Err(AdminError::CsrfRejected),
        };

        let expected = self.sign(issued_at, nonce);
        if !bool::from(expected.as_bytes().ct_eq(signature.as_bytes())) {
            return Err(AdminError::CsrfRejected);
        }

        let issued: i64 = issued_at.parse().map_err(|_| AdminError::CsrfRejected)?;
        let age = now.timestamp() - issued;
        if age > self.max_age_secs || age < -MAX_SKEW_SECS {
            return Err(AdminError::CsrfRejected);
        }
        Ok(())
    }

    /// Double-submit check: the form copy must equal the cookie copy and verify
    pub fn verify_pair(&self, field: &str, cookie: Option<&str>) -> AdminResult<()> {
        let cookie = cookie.ok_or(AdminError::CsrfRejected)?;
        if !bool::from(field.as_bytes().ct_eq(cookie.as_bytes())) {
            return Err(AdminError::CsrfRejected);
        }
        self.verify(field)
    }

    /// `Set-Cookie` value delivering `token` to pages under `path`
    pub fn cookie_header(&self, token: &str, path: &str) -> String {
        format!(
            "{}={}; Path={}; Max-Age={}; HttpOnly; SameSite=Strict",
            CSRF_COOKIE, token, path, self.max_age_secs
        )
    }

    fn sign(&self, issued_at: &str, nonce: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.secret);
        hasher.update(issued_at.as_bytes());
        hasher.update(b".");
        hasher.update(nonce.as_bytes());
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }
}

impl std::fmt::Debug for CsrfGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsrfGuard")
            .field("max_age_secs", &self.max_age_secs)
            .finish_non_exhaustive()
    }
}

/// Pull the token cookie out of a `Cookie` request header value
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE)
        .map(|(_, value)| value)
}
