use crate::error::{ClientError, Result};
use crate::ConchApi;
use conch_types::{Device, HardwareProduct};
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Blocking HTTP implementation of [`ConchApi`].
///
/// One request per call, bearer-token auth, status-to-error mapping and
/// nothing else. The aggregator treats this as an opaque collaborator.
pub struct RestClient {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let mut request = self.agent.get(&url);
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        let response = request.call().map_err(|e| ClientError::from_ureq(&url, e))?;
        response.into_json().map_err(|source| ClientError::Decode {
            url: url.clone(),
            source,
        })
    }
}

impl ConchApi for RestClient {
    fn get_hardware_products(&self) -> Result<Vec<HardwareProduct>> {
        self.get_json("/hardware_product")
    }

    fn get_device(&self, serial: &str) -> Result<Device> {
        self.get_json(&format!("/device/{}", serial))
    }
}

/// Fetch the full body of an arbitrary URL as a string.
///
/// Used for the URL-mode raw-report loader; the export usually lives on an
/// object store, not behind the Conch API, so no auth header is sent.
pub fn fetch_body(url: &str) -> Result<String> {
    let response = ureq::get(url)
        .timeout(REQUEST_TIMEOUT)
        .call()
        .map_err(|e| ClientError::from_ureq(url, e))?;
    response.into_string().map_err(|source| ClientError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = RestClient::new("https://conch.example.com/", None);
        assert_eq!(client.base_url, "https://conch.example.com");
    }
}
