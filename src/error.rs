/// Internal error taxonomy for a single upload exchange.
///
/// The public operations never surface these: every variant is normalized
/// into the operation's negative value (`None` or `false`) before control
/// returns to the caller.
#[derive(Debug, thiserror::Error)]
pub(crate) enum UploadError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// The response resolved against a URL outside the configured origin.
    #[error("response resolved outside the configured origin: {url}")]
    OriginMismatch { url: String },
    /// The response body could not be interpreted as text.
    #[error("decode error: {0}")]
    Decode(String),
}
