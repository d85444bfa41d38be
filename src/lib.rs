pub mod client;
pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod model;
pub mod render;
pub mod router;
pub mod session;
pub mod shell;
pub mod views;

// Re-export the main types
pub use client::{CocktailApi, CocktailDbClient, CocktailDbClientBuilder};
pub use config::{ApiConfig, BrowserConfig};
pub use context::{AppContext, FilterPreference};
pub use envelope::{Collection, DrinksResponse, IngredientResponse};
pub use error::{CocktailError, Endpoint, RequestFailure};
pub use model::{AlcoholicFilter, Drink, DrinkDetail, Ingredient, IngredientWithMeasure};
pub use router::Route;
pub use session::{Command, Session};

use log::debug;

/// Search drinks by ingredient against the public database.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> Result<(), cocktail_browser::CocktailError> {
/// let response = cocktail_browser::search_cocktails("Gin").await?;
/// for drink in response.drinks.as_slice() {
///     println!("{}", drink.name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_cocktails(ingredient: &str) -> Result<DrinksResponse<Drink>, CocktailError> {
    let client = CocktailDbClient::new()?;
    Ok(client.search_by_ingredient(ingredient).await?)
}

/// Fetch one drink with its ingredient list, or `None` when the id is unknown
pub async fn fetch_cocktail(id: &str) -> Result<Option<DrinkDetail>, CocktailError> {
    let client = CocktailDbClient::new()?;
    let response = client.get_drink_by_id(id).await?;
    let drink = response.drinks.into_vec().into_iter().next();
    debug!("Drink {} found: {}", id, drink.is_some());
    Ok(drink)
}
