use crate::{Result, UploadError};

/// Literal marker the backend embeds in an accepting reply.
pub(crate) const SUCCESS_MARKER: &str = "Success";
/// Literal marker the backend embeds in a rejecting reply.
pub(crate) const FAILURE_MARKER: &str = "Failure";

/// Checks that the response resolved inside the configured origin.
///
/// The comparison is a string-prefix test on the resolved URL, defending
/// against transport-level redirects to unexpected hosts.
pub(crate) fn ensure_origin(resolved_url: &str, base_url: &str) -> Result<()> {
    if resolved_url.starts_with(base_url) {
        Ok(())
    } else {
        Err(UploadError::OriginMismatch {
            url: resolved_url.to_owned(),
        })
    }
}

/// Decodes a reply body as UTF-8 text.
pub(crate) fn decode_body(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|err| UploadError::Decode(format!("reply body is not valid UTF-8: {err}")))
}

/// A write reply is accepting only when it contains the success marker.
pub(crate) fn is_accepting_reply(text: &str) -> bool {
    text.contains(SUCCESS_MARKER)
}

/// A create-user reply is rejecting when it contains the failure marker.
pub(crate) fn is_rejecting_reply(text: &str) -> bool {
    text.contains(FAILURE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::{decode_body, ensure_origin, is_accepting_reply, is_rejecting_reply};
    use crate::UploadError;

    #[test]
    fn origin_accepts_prefixed_url() {
        ensure_origin(
            "https://svc.example.com/write.php",
            "https://svc.example.com",
        )
        .expect("prefixed URL must pass");
    }

    #[test]
    fn origin_rejects_other_host() {
        let err = ensure_origin("https://evil.example.net/write.php", "https://svc.example.com")
            .expect_err("foreign host must fail");
        assert!(matches!(err, UploadError::OriginMismatch { .. }));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let err = decode_body(&[0xff, 0xfe]).expect_err("invalid UTF-8 must fail");
        assert!(matches!(err, UploadError::Decode(_)));
    }

    #[test]
    fn accepting_requires_success_marker() {
        assert!(is_accepting_reply("OK-Success"));
        assert!(!is_accepting_reply("Failure"));
        assert!(!is_accepting_reply(""));
    }

    #[test]
    fn rejecting_requires_failure_marker() {
        assert!(is_rejecting_reply("Failure: duplicate user"));
        assert!(!is_rejecting_reply("Welcome aboard"));
    }
}
