//! Service-account authentication for Google APIs
//!
//! Signs a short-lived JWT with the account's private key and exchanges it
//! for a bearer token at the account's `token_uri`.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SandwichError, SandwichResult};

/// Scopes requested for spreadsheet read/write and Drive lookup
pub const SCOPES: [&str; 3] = [
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive.file",
    "https://www.googleapis.com/auth/drive",
];

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_MINUTES: i64 = 60;

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The fields of a service-account key file this program needs
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: String,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ServiceAccountKey {
    /// Load a key from a JSON credential file
    pub fn from_file(path: &Path) -> SandwichResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SandwichError::Credentials(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> SandwichResult<Self> {
        let key: ServiceAccountKey = serde_json::from_str(content)?;
        if key.client_email.is_empty() {
            return Err(SandwichError::Credentials(
                "client_email is empty".to_string(),
            ));
        }
        Ok(key)
    }

    /// Signed RS256 assertion for the given scopes, valid from `now` for one hour
    pub fn assertion(&self, scopes: &[&str], now: DateTime<Utc>) -> SandwichResult<String> {
        let claims = self.claims(scopes, now);
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.private_key_id.clone();
        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())?;
        Ok(encode(&header, &claims, &key)?)
    }

    fn claims(&self, scopes: &[&str], now: DateTime<Utc>) -> AssertionClaims<'_> {
        AssertionClaims {
            iss: &self.client_email,
            scope: scopes.join(" "),
            aud: &self.token_uri,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(ASSERTION_LIFETIME_MINUTES)).timestamp(),
        }
    }
}

/// Exchange a signed assertion for a bearer token.
///
/// The token is fetched once per run and never refreshed.
pub fn fetch_access_token(
    http: &Client,
    key: &ServiceAccountKey,
    scopes: &[&str],
) -> SandwichResult<String> {
    let assertion = key.assertion(scopes, Utc::now())?;

    debug!(token_uri = %key.token_uri, "requesting access token");
    let response = http
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(SandwichError::Auth(format!("{}: {}", status.as_u16(), message)));
    }

    let body: TokenResponse = response.json()?;
    info!(account = %key.client_email, "authorized service account");
    Ok(body.access_token)
}
