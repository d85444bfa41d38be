use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::client::{CocktailApi, CocktailDbClient};
use crate::config::BrowserConfig;
use crate::error::CocktailError;
use crate::model::AlcoholicFilter;

/// Session-wide preference for the alcoholic classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterPreference {
    #[default]
    All,
    Alcoholic,
    NonAlcoholic,
}

impl FilterPreference {
    /// Browse filter implied by the preference, if any
    pub fn as_filter(&self) -> Option<AlcoholicFilter> {
        match self {
            FilterPreference::All => None,
            FilterPreference::Alcoholic => Some(AlcoholicFilter::Alcoholic),
            FilterPreference::NonAlcoholic => Some(AlcoholicFilter::NonAlcoholic),
        }
    }
}

impl fmt::Display for FilterPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterPreference::All => "all",
            FilterPreference::Alcoholic => "alcoholic",
            FilterPreference::NonAlcoholic => "non-alcoholic",
        })
    }
}

impl FromStr for FilterPreference {
    type Err = CocktailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(FilterPreference::All);
        }
        Ok(match s.parse::<AlcoholicFilter>()? {
            AlcoholicFilter::Alcoholic => FilterPreference::Alcoholic,
            AlcoholicFilter::NonAlcoholic => FilterPreference::NonAlcoholic,
        })
    }
}

/// Application-wide context, created once at start-up and passed explicitly.
pub struct AppContext {
    api: Arc<dyn CocktailApi>,
    popular_ingredients: Vec<String>,
    filter_preference: FilterPreference,
}

impl AppContext {
    pub fn new(api: Arc<dyn CocktailApi>, config: &BrowserConfig) -> Self {
        Self {
            api,
            popular_ingredients: config.popular_ingredients.clone(),
            filter_preference: FilterPreference::default(),
        }
    }

    /// Context backed by the real HTTP client
    pub fn from_config(config: &BrowserConfig) -> Result<Self, CocktailError> {
        let client = CocktailDbClient::from_config(&config.api)?;
        Ok(Self::new(Arc::new(client), config))
    }

    pub fn api(&self) -> &Arc<dyn CocktailApi> {
        &self.api
    }

    pub fn popular_ingredients(&self) -> &[String] {
        &self.popular_ingredients
    }

    pub fn filter_preference(&self) -> FilterPreference {
        self.filter_preference
    }

    pub fn set_filter_preference(&mut self, preference: FilterPreference) {
        self.filter_preference = preference;
    }
}
