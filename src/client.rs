use std::time::Duration;

use crate::error::{Error, Result};
use crate::rates::RateDate;

const DEFAULT_BASE_URL: &str = "https://openexchangerates.org/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the Open Exchange Rates endpoints. Issues exactly one
/// request per lookup, with no retries.
pub struct Client {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl Client {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different base URL.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        // Non-200 statuses are handled below so the error body stays readable.
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Endpoint serving the snapshot for `date`, without the query string.
    pub fn endpoint_url(&self, date: RateDate) -> String {
        match date {
            RateDate::Latest => format!("{}/latest.json", self.base_url),
            RateDate::Historical(date) => format!("{}/historical/{date}.json", self.base_url),
        }
    }

    /// Fetch the raw response body for `date`.
    pub fn fetch(&self, date: RateDate) -> Result<String> {
        let url = self.endpoint_url(date);
        log::debug!("GET {url}");
        let mut resp = self
            .agent
            .get(&url)
            .query("app_id", &self.api_key)
            .call()?;
        let status = resp.status();
        let body = resp.body_mut().read_to_string()?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::Provider {
                status: status.as_u16(),
                body,
            })
        }
    }
}
