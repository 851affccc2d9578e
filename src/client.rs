use std::collections::HashMap;
use std::fmt;

use reqwest::header;

use crate::{classify, encode, DataSourceConfig, Result, SqlStatement, UploadError};

#[derive(Clone)]
/// HTTP client for the form-POST database upload endpoints.
///
/// One `reqwest` session is created at construction and reused for every
/// request issued through this instance. Each operation is a single
/// round trip: build the body, POST it, classify the plain-text reply.
/// All failures — transport, origin mismatch, undecodable body, rejecting
/// reply text — collapse into the operation's negative value; callers
/// cannot distinguish the cause.
///
/// Operations resolve on whatever task awaits them, so results land on the
/// caller's own execution context regardless of which runtime worker drove
/// the I/O, and exactly once per call.
pub struct UploadClient {
    http: reqwest::Client,
    config: DataSourceConfig,
}

impl fmt::Debug for UploadClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadClient")
            .field("config", &self.config)
            .finish()
    }
}

impl UploadClient {
    /// Creates a client over a complete data source configuration.
    ///
    /// # Panics
    ///
    /// Panics if the base URL, any endpoint path, or the username is empty.
    /// An incomplete configuration is programmer misuse; the client halts
    /// rather than query an undefined backend.
    pub fn new(config: DataSourceConfig) -> Self {
        let required = [
            ("base URL", &config.base_url),
            ("create-user path", &config.create_user_path),
            ("key-values path", &config.key_values_path),
            ("write path", &config.write_path),
            ("username", &config.username),
        ];
        for (name, value) in required {
            assert!(
                !value.trim().is_empty(),
                "data source {name} must be set before issuing database operations"
            );
        }

        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a client from `DBUPLOAD_*` environment variables.
    ///
    /// See [`DataSourceConfig::from_env`] for the variable list.
    pub fn from_env() -> std::result::Result<Self, String> {
        DataSourceConfig::from_env().map(Self::new)
    }

    /// Creates a user record and returns the server's reply text.
    ///
    /// POSTs `Password`, `Username`, `Email`, and the percent-encoded
    /// `SQLQuery` to the create-user endpoint. Returns the decoded reply
    /// when the round trip succeeds, the response comes from the configured
    /// origin, and the text does not contain `"Failure"`; `None` otherwise.
    pub async fn create_user(&self, statement: &SqlStatement, email: &str) -> Option<String> {
        let body = encode::create_user_body(&self.config, statement, email);
        match self.exchange_text(&self.config.create_user_path, body).await {
            Ok(text) if classify::is_rejecting_reply(&text) => None,
            Ok(text) => Some(text),
            Err(err) => {
                note_failure("create_user", &err);
                None
            }
        }
    }

    /// Uploads caller-supplied key/value pairs verbatim.
    ///
    /// Pairs are joined as `k=v&...` without encoding, in unspecified order.
    /// Returns `true` when the round trip succeeds and the response comes
    /// from the configured origin; the reply body is not inspected. An empty
    /// map fails immediately without issuing a request.
    pub async fn upload_key_values(&self, pairs: &HashMap<String, String>) -> bool {
        let Some(body) = encode::key_values_body(pairs) else {
            return false;
        };
        match self.exchange(&self.config.key_values_path, body).await {
            Ok(_) => true,
            Err(err) => {
                note_failure("upload_key_values", &err);
                false
            }
        }
    }

    /// Uploads a formatted statement to the write endpoint.
    ///
    /// Returns `true` only when the round trip succeeds, the response comes
    /// from the configured origin, and the decoded reply text contains
    /// `"Success"`.
    pub async fn upload_statement(&self, statement: &SqlStatement) -> bool {
        let body = encode::statement_body(&self.config, statement);
        match self.exchange_text(&self.config.write_path, body).await {
            Ok(text) => classify::is_accepting_reply(&text),
            Err(err) => {
                note_failure("upload_statement", &err);
                false
            }
        }
    }

    /// Sends one POST exchange and verifies the response origin.
    ///
    /// Every request carries the configured service credentials as Basic
    /// auth, unconditionally: the trust policy for the single configured
    /// origin never inspects a challenge before answering it.
    async fn exchange(&self, path: &str, body: String) -> Result<reqwest::Response> {
        let url = self.config.endpoint_url(path);
        #[cfg(feature = "tracing")]
        tracing::debug!(%url, body_len = body.len(), "sending upload request");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.website_pass))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await
            .map_err(UploadError::Transport)?;

        classify::ensure_origin(response.url().as_str(), &self.config.base_url)?;
        Ok(response)
    }

    /// Sends one exchange and decodes the reply body as text.
    async fn exchange_text(&self, path: &str, body: String) -> Result<String> {
        let response = self.exchange(path, body).await?;
        let bytes = response.bytes().await.map_err(UploadError::Transport)?;
        classify::decode_body(&bytes)
    }
}

fn note_failure(operation: &str, err: &UploadError) {
    #[cfg(feature = "tracing")]
    tracing::debug!("{operation} resolved negatively: {err}");
    #[cfg(not(feature = "tracing"))]
    let _ = (operation, err);
}

#[cfg(test)]
mod tests {
    use super::UploadClient;
    use crate::DataSourceConfig;

    fn config() -> DataSourceConfig {
        DataSourceConfig::new(
            "https://svc.example.com",
            "adduser.php",
            "custom.php",
            "write.php",
            "u",
            "web-pass",
            "p",
        )
    }

    #[test]
    #[should_panic(expected = "base URL must be set")]
    fn new_panics_on_empty_base_url() {
        let mut config = config();
        config.base_url = String::new();
        let _ = UploadClient::new(config);
    }

    #[test]
    #[should_panic(expected = "write path must be set")]
    fn new_panics_on_blank_endpoint_path() {
        let mut config = config();
        config.write_path = "  ".to_owned();
        let _ = UploadClient::new(config);
    }

    #[test]
    fn debug_redacts_secrets() {
        let client = UploadClient::new(config());
        let debug = format!("{client:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("web-pass"));
    }
}
