mod builder;
mod cocktaildb;

pub use builder::CocktailDbClientBuilder;
pub use cocktaildb::CocktailDbClient;

use async_trait::async_trait;

use crate::envelope::{DrinksResponse, IngredientResponse};
use crate::error::RequestFailure;
use crate::model::{AlcoholicFilter, Drink, DrinkDetail};

/// Read operations against the cocktail database.
///
/// Every response is normalized before it is returned; a failed request
/// never yields a partial result.
#[async_trait]
pub trait CocktailApi: Send + Sync {
    /// Drinks containing the given ingredient
    async fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<DrinksResponse<Drink>, RequestFailure>;

    /// Drinks with the given alcoholic classification
    async fn filter_by_alcoholic(
        &self,
        filter: AlcoholicFilter,
    ) -> Result<DrinksResponse<Drink>, RequestFailure>;

    /// Full record for one drink; zero or one element in practice
    async fn get_drink_by_id(
        &self,
        id: &str,
    ) -> Result<DrinksResponse<DrinkDetail>, RequestFailure>;

    /// Metadata for an ingredient
    async fn get_ingredient_by_name(
        &self,
        name: &str,
    ) -> Result<IngredientResponse, RequestFailure>;
}
