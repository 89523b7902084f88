use crate::app_lib::{ApiClient, AppConfig};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub config: AppConfig,
}

impl GlobalArgs {
    #[must_use]
    pub const fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// # Errors
    /// Returns an error if the configured API URL is unusable.
    pub fn api_client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.config).context("invalid API configuration")
    }
}
