//! View state for the three pages and the requests they drive.

pub mod cocktail;
pub mod home;
pub mod ingredient;
pub mod query;

pub use cocktail::{CocktailDetailState, CocktailDetailView};
pub use home::{HomeState, HomeView, Tab};
pub use ingredient::{IngredientDetailState, IngredientDetailView};
pub use query::{Query, QueryStatus};

use crate::client::CocktailApi;
use crate::envelope::{DrinksResponse, IngredientResponse};
use crate::error::RequestFailure;
use crate::model::{AlcoholicFilter, Drink, DrinkDetail};

/// A request a view wants issued, identified by its query key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Search(String),
    Browse(AlcoholicFilter),
    Drink(String),
    Ingredient(String),
}

/// A completed request, still tagged with the key it was issued for
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Search(String, Result<DrinksResponse<Drink>, RequestFailure>),
    Browse(AlcoholicFilter, Result<DrinksResponse<Drink>, RequestFailure>),
    Drink(String, Result<DrinksResponse<DrinkDetail>, RequestFailure>),
    Ingredient(String, Result<IngredientResponse, RequestFailure>),
}

/// View state that consumes fetch outcomes
pub trait Page {
    /// Apply an outcome; returns true when the page changed
    fn apply(&mut self, outcome: FetchOutcome) -> bool;
}

/// Issue one request against the API
pub async fn execute(api: &dyn CocktailApi, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::Search(term) => {
            let result = api.search_by_ingredient(&term).await;
            FetchOutcome::Search(term, result)
        }
        FetchRequest::Browse(filter) => {
            let result = api.filter_by_alcoholic(filter).await;
            FetchOutcome::Browse(filter, result)
        }
        FetchRequest::Drink(id) => {
            let result = api.get_drink_by_id(&id).await;
            FetchOutcome::Drink(id, result)
        }
        FetchRequest::Ingredient(name) => {
            let result = api.get_ingredient_by_name(&name).await;
            FetchOutcome::Ingredient(name, result)
        }
    }
}

/// Issue every request in order and apply each outcome to `page`
pub async fn settle<P: Page>(api: &dyn CocktailApi, page: &mut P, requests: Vec<FetchRequest>) {
    for request in requests {
        let outcome = execute(api, request).await;
        page.apply(outcome);
    }
}
