use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::{DataSourceConfig, SqlStatement};

/// Percent-encodes a formatted statement over the alphanumeric-safe set.
///
/// Only ASCII letters and digits pass through unescaped; everything else,
/// including normally-unreserved characters, is escaped. Non-ASCII letters
/// are escaped byte-wise too; the backend percent-decodes the `SQLQuery`
/// field, so an escaped multibyte character decodes to the same text as an
/// unescaped one.
pub(crate) fn encode_statement(formatted: &str) -> String {
    utf8_percent_encode(formatted, NON_ALPHANUMERIC).to_string()
}

/// Builds the write-statement body: `Password=..&Username=..&SQLQuery=..`.
///
/// Field order is part of the wire contract.
pub(crate) fn statement_body(config: &DataSourceConfig, statement: &SqlStatement) -> String {
    format!(
        "Password={}&Username={}&SQLQuery={}",
        config.database_pass,
        config.username,
        encode_statement(statement.as_str())
    )
}

/// Builds the create-user body, which carries the recipient email between
/// the credential fields and the statement. The email travels verbatim.
pub(crate) fn create_user_body(
    config: &DataSourceConfig,
    statement: &SqlStatement,
    email: &str,
) -> String {
    format!(
        "Password={}&Username={}&Email={}&SQLQuery={}",
        config.database_pass,
        config.username,
        email,
        encode_statement(statement.as_str())
    )
}

/// Joins caller-supplied pairs as `k1=v1&k2=v2&...`, verbatim and in
/// unspecified order. Returns `None` for an empty map so the caller can fail
/// without issuing a request.
pub(crate) fn key_values_body(pairs: &HashMap<String, String>) -> Option<String> {
    if pairs.is_empty() {
        return None;
    }
    Some(
        pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&"),
    )
}
