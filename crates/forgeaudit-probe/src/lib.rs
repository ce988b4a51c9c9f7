//! HTTP implementation of the fallback redirect probe.
//!
//! One GET per lookup against `<base_url>/<org>/<name>`. Redirects are followed by the client;
//! the path of the final response URL is returned. Any non-success terminal status is an error.

#![forbid(unsafe_code)]

use forgeaudit_domain::{ProbeError, RedirectProbe};
use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("forgeaudit/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct HttpProbe {
    client: Client,
    base_url: Url,
    timeout_ms: u64,
}

impl HttpProbe {
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, ProbeError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ProbeError::InvalidUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ProbeError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProbeError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout_ms,
        })
    }

    /// Target URL for one lookup. Each segment is percent-encoded on push; only segments that
    /// cannot name a path component at all are rejected.
    pub fn target(&self, org: &str, name: &str) -> Result<Url, ProbeError> {
        if !is_path_segment(org) || !is_path_segment(name) {
            return Err(ProbeError::InvalidUrl(format!(
                "{}/{org}/{name}",
                self.base_url.as_str().trim_end_matches('/')
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProbeError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(org)
            .push(name);
        Ok(url)
    }

    fn map_error(&self, err: reqwest::Error) -> ProbeError {
        if err.is_timeout() {
            ProbeError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else if let Some(status) = err.status() {
            ProbeError::Status(status.as_u16())
        } else if err.is_builder() {
            ProbeError::InvalidUrl(err.to_string())
        } else {
            ProbeError::Request(err.to_string())
        }
    }
}

impl RedirectProbe for HttpProbe {
    fn final_path(&self, org: &str, name: &str) -> Result<String, ProbeError> {
        let url = self.target(org, name)?;
        tracing::debug!(%url, "probing repository location");

        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| self.map_error(e))?;

        tracing::debug!(final_url = %resp.url(), "probe finished");
        Ok(resp.url().path().to_string())
    }
}

fn is_path_segment(s: &str) -> bool {
    !matches!(s, "" | "." | "..")
}
