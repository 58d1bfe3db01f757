// orderdesk/src/auth/token.rs

//! Compact HS256 session tokens (`header.claims.signature`, base64url without padding).

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::auth::principal::Principal;
use crate::error::{DeskError, DeskResult};
use crate::model::{Role, User};

type HmacSha256 = Hmac<Sha256>;

/// Lifetime of a session token and of the cookie that carries it.
pub const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TokenHeader {
  alg: String,
  typ: String,
}

/// Claims carried by a session token. Times are Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
  pub sub: Uuid,
  pub role: Role,
  pub iat: i64,
  pub exp: i64,
}

impl TokenClaims {
  pub fn principal(&self) -> Principal {
    Principal::new(self.sub, self.role)
  }
}

/// Signs and verifies session tokens with a shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
  secret: Vec<u8>,
  ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TokenIssuer")
      .field("secret", &"[REDACTED]")
      .field("ttl", &self.ttl)
      .finish()
  }
}

impl TokenIssuer {
  pub fn new(secret: impl AsRef<[u8]>) -> Self {
    Self::with_ttl(secret, Duration::hours(SESSION_TTL_HOURS))
  }

  pub fn with_ttl(secret: impl AsRef<[u8]>, ttl: Duration) -> Self {
    Self {
      secret: secret.as_ref().to_vec(),
      ttl,
    }
  }

  pub fn ttl(&self) -> Duration {
    self.ttl
  }

  fn mac(&self) -> DeskResult<HmacSha256> {
    HmacSha256::new_from_slice(&self.secret).map_err(|e| DeskError::Internal(format!("Invalid token secret: {}", e)))
  }

  /// Issues a token for `user`, valid from now for the configured lifetime.
  #[instrument(name = "token::issue", skip(self, user), fields(user_id = %user.id, role = %user.role))]
  pub fn issue(&self, user: &User) -> DeskResult<String> {
    let iat = Utc::now().timestamp();
    let claims = TokenClaims {
      sub: user.id,
      role: user.role,
      iat,
      exp: iat + self.ttl.num_seconds(),
    };
    self.sign(&claims)
  }

  /// Encodes and signs arbitrary claims.
  pub fn sign(&self, claims: &TokenClaims) -> DeskResult<String> {
    let header = TokenHeader {
      alg: "HS256".to_string(),
      typ: "JWT".to_string(),
    };
    let header_json = serde_json::to_vec(&header).map_err(|e| DeskError::Internal(e.to_string()))?;
    let claims_json = serde_json::to_vec(claims).map_err(|e| DeskError::Internal(e.to_string()))?;
    let signing_input = format!(
      "{}.{}",
      URL_SAFE_NO_PAD.encode(header_json),
      URL_SAFE_NO_PAD.encode(claims_json)
    );

    let mut mac = self.mac()?;
    mac.update(signing_input.as_bytes());
    let signature = mac.finalize().into_bytes();
    Ok(format!("{}.{}", signing_input, URL_SAFE_NO_PAD.encode(signature)))
  }

  /// Verifies signature, algorithm and expiry, returning the claims.
  ///
  /// Every failure maps to the same `Unauthorized` error; the reason is only logged.
  #[instrument(name = "token::verify", skip_all)]
  pub fn verify(&self, token: &str) -> DeskResult<TokenClaims> {
    let rejected = |reason: &str| {
      debug!(reason, "Session token rejected.");
      DeskError::Unauthorized("Invalid or expired session".to_string())
    };

    let mut parts = token.split('.');
    let (header_b64, claims_b64, signature_b64) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
      (Some(h), Some(c), Some(s), None) => (h, c, s),
      _ => return Err(rejected("token is not three dot-separated segments")),
    };

    let signature = URL_SAFE_NO_PAD
      .decode(signature_b64)
      .map_err(|_| rejected("signature is not base64url"))?;
    let mut mac = self.mac()?;
    mac.update(header_b64.as_bytes());
    mac.update(b".");
    mac.update(claims_b64.as_bytes());
    mac.verify_slice(&signature).map_err(|_| rejected("signature mismatch"))?;

    let header: TokenHeader = URL_SAFE_NO_PAD
      .decode(header_b64)
      .ok()
      .and_then(|bytes| serde_json::from_slice(&bytes).ok())
      .ok_or_else(|| rejected("header does not decode"))?;
    if header.alg != "HS256" {
      return Err(rejected("unexpected algorithm"));
    }

    let claims: TokenClaims = URL_SAFE_NO_PAD
      .decode(claims_b64)
      .ok()
      .and_then(|bytes| serde_json::from_slice(&bytes).ok())
      .ok_or_else(|| rejected("claims do not decode"))?;
    if claims.exp <= Utc::now().timestamp() {
      return Err(rejected("token expired"));
    }
    Ok(claims)
  }

  /// Convenience for the request layer: the principal of a valid token.
  pub fn principal(&self, token: &str) -> DeskResult<Principal> {
    self.verify(token).map(|claims| claims.principal())
  }
}
