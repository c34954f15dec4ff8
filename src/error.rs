use thiserror::Error;

use crate::rates::CurrencyCode;

/// Everything that can end an invocation. None of these are retried; each is
/// rendered as a single line and the process exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument that passed clap's shape checks but failed validation.
    #[error("{0}")]
    Usage(String),

    /// The API key is missing or empty.
    #[error("{0}")]
    Configuration(String),

    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(#[from] ureq::Error),

    /// The provider answered with a non-200 status.
    #[error("provider returned HTTP {status}: {}", body.trim())]
    Provider { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("malformed provider response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A requested code has no entry in the fetched snapshot.
    #[error("currency {0} not found in rates for the requested date")]
    UnknownCurrency(CurrencyCode),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn provider_error_surfaces_status() {
        let err = Error::Provider {
            status: 401,
            body: "{\"message\": \"invalid_app_id\"}\n".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"), "missing status in {msg:?}");
        assert!(msg.contains("invalid_app_id"), "missing body in {msg:?}");
    }

    #[test]
    fn unknown_currency_names_the_code() {
        let code = "zzz".parse().unwrap();
        assert_eq!(
            Error::UnknownCurrency(code).to_string(),
            "currency ZZZ not found in rates for the requested date"
        );
    }
}
