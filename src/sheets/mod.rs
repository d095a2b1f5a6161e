// sportshub-service/src/sheets/mod.rs
//
// Best-effort adapter for the spreadsheet-backed store. When the GOOGLE_*
// variables are unset the adapter runs in mock mode: appends are skipped
// and reads return no rows, so every caller keeps working without the
// external service.
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::sync::Mutex;

const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

// What actually happened to an append. Callers treat all three as
// non-fatal; the distinction exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Written,
    Skipped,
    Failed,
}

#[derive(Debug)]
pub struct SheetError(pub String);

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SheetError {}

#[derive(Clone)]
struct SheetsConfig {
    client_email: String,
    private_key: String,
    sheet_id: String,
}

struct CachedToken {
    access_token: String,
    expires_at: i64,
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

pub struct SheetsClient {
    config: Option<SheetsConfig>,
    http: reqwest::Client,
    token: Mutex<Option<CachedToken>>,
}

impl SheetsClient {
    // Detect configuration from the environment. All three variables must
    // be present; the private key arrives with literal \n escapes.
    pub fn from_env() -> Self {
        let config = match (
            env::var("GOOGLE_CLIENT_EMAIL"),
            env::var("GOOGLE_PRIVATE_KEY"),
            env::var("GOOGLE_SHEET_ID"),
        ) {
            (Ok(client_email), Ok(private_key), Ok(sheet_id)) => {
                info!("✅ Google Sheets API configured");
                Some(SheetsConfig {
                    client_email,
                    private_key: private_key.replace("\\n", "\n"),
                    sheet_id,
                })
            }
            _ => {
                info!("📝 Google Sheets not configured - using mock data");
                info!("💡 Set GOOGLE_CLIENT_EMAIL, GOOGLE_PRIVATE_KEY, and GOOGLE_SHEET_ID in .env to enable");
                None
            }
        };

        SheetsClient {
            config,
            http: reqwest::Client::new(),
            token: Mutex::new(None),
        }
    }

    // Mock-mode client, independent of the environment.
    pub fn unconfigured() -> Self {
        SheetsClient {
            config: None,
            http: reqwest::Client::new(),
            token: Mutex::new(None),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    // Append one row to the named sheet. Never fails the caller: problems
    // are logged and reported through the outcome only.
    pub async fn append_row(&self, sheet_name: &str, values: Vec<String>) -> AppendOutcome {
        let config = match &self.config {
            Some(config) => config.clone(),
            None => {
                info!("📝 Mock: would append to {}: {:?}", sheet_name, values);
                return AppendOutcome::Skipped;
            }
        };

        match self.try_append(&config, sheet_name, &values).await {
            Ok(()) => {
                info!("✅ Appended row to {}: {:?}", sheet_name, values);
                AppendOutcome::Written
            }
            Err(e) => {
                error!("❌ Error appending to {}: {}", sheet_name, e);
                info!("📝 Continuing without Google Sheets - data: {:?}", values);
                AppendOutcome::Failed
            }
        }
    }

    // Fetch all rows (header included) for the named sheet. Unconfigured
    // resolves to no rows; a remote failure is the caller's problem, unlike
    // append.
    pub async fn get_rows(&self, sheet_name: &str) -> Result<Vec<Vec<String>>, SheetError> {
        let config = match &self.config {
            Some(config) => config.clone(),
            None => {
                info!("📝 Mock: would fetch rows from {}", sheet_name);
                return Ok(Vec::new());
            }
        };

        let token = self.access_token(&config).await?;
        let response = self
            .http
            .get(self.values_url(&config.sheet_id, sheet_name, ""))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| SheetError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            error!("❌ Error fetching from {}: HTTP {}", sheet_name, status);
            return Err(SheetError(format!("sheet read failed with {}", status)));
        }

        let range: ValueRange = response
            .json()
            .await
            .map_err(|e| SheetError(e.to_string()))?;
        Ok(range.values)
    }

    async fn try_append(
        &self,
        config: &SheetsConfig,
        sheet_name: &str,
        values: &[String],
    ) -> Result<(), SheetError> {
        let token = self.access_token(config).await?;
        let response = self
            .http
            .post(self.values_url(&config.sheet_id, sheet_name, ":append"))
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(&token)
            .json(&serde_json::json!({ "values": [values] }))
            .send()
            .await
            .map_err(|e| SheetError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SheetError(format!(
                "sheet append failed with {}",
                response.status()
            )));
        }
        Ok(())
    }

    fn values_url(&self, sheet_id: &str, sheet_name: &str, suffix: &str) -> String {
        let range = format!("{}!A:Z", sheet_name);
        format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}{}",
            sheet_id,
            urlencoding::encode(&range),
            suffix
        )
    }

    // Service-account token, cached until shortly before expiry.
    async fn access_token(&self, config: &SheetsConfig) -> Result<String, SheetError> {
        let now = Utc::now().timestamp();
        {
            let guard = match self.token.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(cached) = guard.as_ref() {
                if cached.expires_at - 60 > now {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        let fresh = self.fetch_token(config, now).await?;
        let access_token = fresh.access_token.clone();
        let mut guard = match self.token.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(fresh);
        Ok(access_token)
    }

    async fn fetch_token(&self, config: &SheetsConfig, now: i64) -> Result<CachedToken, SheetError> {
        let claims = AssertionClaims {
            iss: &config.client_email,
            scope: SHEETS_SCOPE,
            aud: TOKEN_URL,
            iat: now,
            exp: now + 3600,
        };

        let key = EncodingKey::from_rsa_pem(config.private_key.as_bytes())
            .map_err(|e| SheetError(format!("invalid service account key: {}", e)))?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| SheetError(format!("failed to sign assertion: {}", e)))?;

        let response = self
            .http
            .post(TOKEN_URL)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)])
            .send()
            .await
            .map_err(|e| SheetError(e.to_string()))?;

        if !response.status().is_success() {
            warn!("⚠️ Token exchange failed: HTTP {}", response.status());
            return Err(SheetError(format!(
                "token exchange failed with {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SheetError(e.to_string()))?;
        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: now + token.expires_in,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock-mode contract: appends always resolve, reads always come back
    // empty, nothing ever errors.
    #[actix_rt::test]
    async fn unconfigured_append_is_skipped() {
        let client = SheetsClient::unconfigured();
        assert!(!client.is_configured());

        let outcome = client
            .append_row("Registrations", vec!["a".into(), "b".into()])
            .await;
        assert_eq!(outcome, AppendOutcome::Skipped);
    }

    #[actix_rt::test]
    async fn unconfigured_get_rows_is_empty() {
        let client = SheetsClient::unconfigured();
        let rows = client.get_rows("Teams").await.unwrap();
        assert!(rows.is_empty());
    }
}
