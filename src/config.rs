use std::fmt;

/// Connection settings for one upload backend origin.
///
/// All fields except the two secrets are required; [`crate::UploadClient::new`]
/// refuses an incomplete configuration. The two passwords serve different
/// exchanges: `database_pass` is sent in the POST body's `Password` field,
/// `website_pass` answers transport-level credential challenges.
#[derive(Clone)]
pub struct DataSourceConfig {
    /// Base URL of the backend, e.g. `https://svc.example.com`.
    pub base_url: String,
    /// Relative path of the create-user endpoint.
    pub create_user_path: String,
    /// Relative path of the custom key/value endpoint.
    pub key_values_path: String,
    /// Relative path of the write-statement endpoint.
    pub write_path: String,
    /// Service user name, sent in POST bodies and as the Basic auth user.
    pub username: String,
    /// Secret answering transport credential challenges.
    pub website_pass: String,
    /// Secret sent in the POST body's `Password` field.
    pub database_pass: String,
}

impl fmt::Debug for DataSourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSourceConfig")
            .field("base_url", &self.base_url)
            .field("create_user_path", &self.create_user_path)
            .field("key_values_path", &self.key_values_path)
            .field("write_path", &self.write_path)
            .field("username", &self.username)
            .field("website_pass", &"<redacted>")
            .field("database_pass", &"<redacted>")
            .finish()
    }
}

impl DataSourceConfig {
    /// Builds a configuration from its parts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        base_url: impl Into<String>,
        create_user_path: impl Into<String>,
        key_values_path: impl Into<String>,
        write_path: impl Into<String>,
        username: impl Into<String>,
        website_pass: impl Into<String>,
        database_pass: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            create_user_path: create_user_path.into(),
            key_values_path: key_values_path.into(),
            write_path: write_path.into(),
            username: username.into(),
            website_pass: website_pass.into(),
            database_pass: database_pass.into(),
        }
    }

    /// Reads a configuration from environment variables.
    ///
    /// Reads:
    /// - `DBUPLOAD_BASE_URL` — backend base URL
    /// - `DBUPLOAD_CREATE_USER_PATH` — create-user endpoint path
    /// - `DBUPLOAD_KEY_VALUES_PATH` — key/value endpoint path
    /// - `DBUPLOAD_WRITE_PATH` — write-statement endpoint path
    /// - `DBUPLOAD_USERNAME` — service user name
    /// - `DBUPLOAD_WEBSITE_PASS` — credential-challenge secret
    /// - `DBUPLOAD_DATABASE_PASS` — POST-body secret
    ///
    /// Returns an error if any variable is missing or empty.
    pub fn from_env() -> std::result::Result<Self, String> {
        Ok(Self {
            base_url: require_env("DBUPLOAD_BASE_URL")?,
            create_user_path: require_env("DBUPLOAD_CREATE_USER_PATH")?,
            key_values_path: require_env("DBUPLOAD_KEY_VALUES_PATH")?,
            write_path: require_env("DBUPLOAD_WRITE_PATH")?,
            username: require_env("DBUPLOAD_USERNAME")?,
            website_pass: require_env("DBUPLOAD_WEBSITE_PASS")?,
            database_pass: require_env("DBUPLOAD_DATABASE_PASS")?,
        })
    }

    /// Joins the base URL and a relative endpoint path with a single slash.
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn require_env(name: &str) -> std::result::Result<String, String> {
    let value =
        std::env::var(name).map_err(|_| format!("missing {name} environment variable"))?;
    if value.trim().is_empty() {
        return Err(format!("{name} is set but empty"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::DataSourceConfig;

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
    fn endpoint_url_joins_with_single_slash() {
        assert_eq!(
            config().endpoint_url("write.php"),
            "https://svc.example.com/write.php"
        );
    }

    #[test]
    fn endpoint_url_collapses_duplicate_slashes() {
        let mut config = config();
        config.base_url = "https://svc.example.com/".to_owned();
        assert_eq!(
            config.endpoint_url("/write.php"),
            "https://svc.example.com/write.php"
        );
    }

    #[test]
    fn debug_redacts_both_secrets() {
        let debug = format!("{:?}", config());
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("web-pass"));
        assert!(!debug.contains("\"p\""));
    }
}
