use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use super::{CocktailApi, CocktailDbClientBuilder};
use crate::config::ApiConfig;
use crate::envelope::{
    DrinksResponse, IngredientResponse, RawDrinksEnvelope, RawIngredientsEnvelope,
};
use crate::error::{CocktailError, Endpoint, RequestFailure};
use crate::model::{AlcoholicFilter, Drink, DrinkDetail};

/// HTTP client for TheCocktailDB JSON API
#[derive(Debug, Clone)]
pub struct CocktailDbClient {
    client: Client,
    base_url: String,
    retry_attempts: u32,
    retry_delay: Duration,
}

impl CocktailDbClient {
    /// Client with default settings against the public API
    pub fn new() -> Result<Self, CocktailError> {
        Self::builder().build()
    }

    pub fn builder() -> CocktailDbClientBuilder {
        CocktailDbClientBuilder::default()
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, CocktailError> {
        Self::builder()
            .base_url(config.base_url.clone())
            .timeout(config.timeout())
            .retry_attempts(config.retry_attempts)
            .retry_delay(config.retry_delay())
            .user_agent(config.user_agent.clone())
            .build()
    }

    pub(super) fn from_parts(
        client: Client,
        base_url: String,
        retry_attempts: u32,
        retry_delay: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_attempts,
            retry_delay,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    /// GET an endpoint, retrying failed attempts with a fixed delay
    async fn get_json<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        argument: &str,
    ) -> Result<R, RequestFailure> {
        let total = self.retry_attempts + 1;
        let mut attempt = 1;

        loop {
            debug!("GET {}{} (attempt {}/{})", endpoint, argument, attempt, total);

            match self.try_get_json(endpoint, argument).await {
                Ok(body) => {
                    if attempt > 1 {
                        info!("{}{} succeeded on attempt {}", endpoint, argument, attempt);
                    }
                    return Ok(body);
                }
                Err(failure) => {
                    warn!(
                        "{}{} failed (attempt {}/{}): {}",
                        endpoint, argument, attempt, total, failure.message
                    );
                    if attempt >= total {
                        return Err(failure);
                    }
                }
            }

            attempt += 1;
            if !self.retry_delay.is_zero() {
                debug!("Waiting {:?} before retry", self.retry_delay);
                sleep(self.retry_delay).await;
            }
        }
    }

    async fn try_get_json<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        argument: &str,
    ) -> Result<R, RequestFailure> {
        let url = format!("{}/{}", self.base_url, endpoint.path());
        let response = self
            .client
            .get(&url)
            .query(&[(endpoint.param(), argument)])
            .send()
            .await
            .map_err(|e| RequestFailure::transport(endpoint, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestFailure::status(endpoint, status));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| RequestFailure::transport(endpoint, &e))
    }
}

#[async_trait]
impl CocktailApi for CocktailDbClient {
    async fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<DrinksResponse<Drink>, RequestFailure> {
        let endpoint = Endpoint::SearchByIngredient;
        let raw: RawDrinksEnvelope<Drink> = self.get_json(endpoint, ingredient).await?;
        Ok(DrinksResponse::from_raw(raw, endpoint))
    }

    async fn filter_by_alcoholic(
        &self,
        filter: AlcoholicFilter,
    ) -> Result<DrinksResponse<Drink>, RequestFailure> {
        let endpoint = Endpoint::FilterByAlcoholic;
        let raw: RawDrinksEnvelope<Drink> =
            self.get_json(endpoint, filter.as_query_value()).await?;
        Ok(DrinksResponse::from_raw(raw, endpoint))
    }

    async fn get_drink_by_id(
        &self,
        id: &str,
    ) -> Result<DrinksResponse<DrinkDetail>, RequestFailure> {
        let endpoint = Endpoint::DrinkById;
        let raw: RawDrinksEnvelope<DrinkDetail> = self.get_json(endpoint, id).await?;
        Ok(DrinksResponse::from_raw(raw, endpoint))
    }

    async fn get_ingredient_by_name(
        &self,
        name: &str,
    ) -> Result<IngredientResponse, RequestFailure> {
        let raw: RawIngredientsEnvelope =
            self.get_json(Endpoint::IngredientByName, name).await?;
        Ok(IngredientResponse::from_raw(raw))
    }
}
