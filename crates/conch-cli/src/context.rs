use crate::config::Config;
use anyhow::{anyhow, Result};
use conch_client::RestClient;
use once_cell::sync::OnceCell;

/// Resolved endpoint settings plus a lazily constructed API client.
///
/// Commands that never talk to the API (file-mode reports) must not fail
/// on a missing endpoint, so the client is only built on first use.
pub struct ExecutionContext {
    api_url: Option<String>,
    token: Option<String>,
    client: OnceCell<RestClient>,
}

impl ExecutionContext {
    /// Flags beat environment variables beat the config file.
    pub fn new(api_flag: Option<String>, token_flag: Option<String>) -> Result<Self> {
        let config = Config::load()?;

        let api_url = api_flag
            .or_else(|| std::env::var("CONCH_API").ok())
            .or(config.api);
        let token = token_flag
            .or_else(|| std::env::var("CONCH_TOKEN").ok())
            .or(config.token);

        Ok(Self {
            api_url,
            token,
            client: OnceCell::new(),
        })
    }

    pub fn client(&self) -> Result<&RestClient> {
        self.client.get_or_try_init(|| {
            let api_url = self.api_url.as_deref().ok_or_else(|| {
                anyhow!("no API endpoint configured (set --api, CONCH_API, or ~/.conch/config.toml)")
            })?;
            Ok(RestClient::new(api_url, self.token.clone()))
        })
    }
}
