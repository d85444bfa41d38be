use std::time::Duration;

use reqwest::Client;

use super::CocktailDbClient;
use crate::error::CocktailError;

const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Builder for configuring a [`CocktailDbClient`]
#[derive(Debug, Default)]
pub struct CocktailDbClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    retry_attempts: Option<u32>,
    retry_delay: Option<Duration>,
    user_agent: Option<String>,
}

impl CocktailDbClientBuilder {
    /// Set the API base URL
    ///
    /// # Example
    /// ```
    /// use cocktail_browser::CocktailDbClient;
    ///
    /// let client = CocktailDbClient::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for each HTTP attempt
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set how many times a failed request is retried (default 1)
    ///
    /// # Example
    /// ```
    /// use cocktail_browser::CocktailDbClient;
    ///
    /// let client = CocktailDbClient::builder()
    ///     .retry_attempts(0)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.retry_attempts(), 0);
    /// ```
    pub fn retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = Some(attempts);
        self
    }

    /// Set the pause between attempts
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `CocktailError::BuilderError` if:
    /// - The base URL is empty or not http(s)
    /// - The underlying HTTP client cannot be created
    pub fn build(self) -> Result<CocktailDbClient, CocktailError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CocktailError::BuilderError(format!(
                "Base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| concat!("cocktail-browser/", env!("CARGO_PKG_VERSION")).to_string());

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                CocktailError::BuilderError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(CocktailDbClient::from_parts(
            client,
            base_url,
            self.retry_attempts.unwrap_or(1),
            self.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let client = CocktailDbClientBuilder::default().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.retry_attempts(), 1);
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let result = CocktailDbClientBuilder::default()
            .base_url("ftp://example.com")
            .build();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Base URL must start with"));
    }

    #[test]
    fn test_rejects_empty_base_url() {
        assert!(CocktailDbClientBuilder::default().base_url("").build().is_err());
    }
}
