use super::query::Query;
use super::{FetchOutcome, FetchRequest, Page};
use crate::envelope::{DrinksResponse, IngredientResponse};
use crate::error::RequestFailure;
use crate::model::{Drink, Ingredient};

/// State of the `/ingredient/{name}` page.
///
/// The ingredient lookup and the drinks-by-ingredient search run side by
/// side, both keyed by the ingredient name.
#[derive(Debug)]
pub struct IngredientDetailState {
    name: String,
    ingredient: Query<String, IngredientResponse>,
    drinks: Query<String, DrinksResponse<Drink>>,
}

/// What the ingredient page renders
#[derive(Debug, Clone)]
pub enum IngredientDetailView<'a> {
    Loading,
    Failed,
    Loaded {
        name: &'a str,
        /// First metadata record, when the API knows the ingredient
        ingredient: Option<&'a Ingredient>,
        /// Drinks using the ingredient; empty when none were found
        drinks: &'a [Drink],
    },
}

impl IngredientDetailState {
    pub fn open(name: impl Into<String>) -> (Self, Vec<FetchRequest>) {
        let name = name.into();
        let key = (!name.is_empty()).then(|| name.clone());

        let mut ingredient = Query::new();
        let mut drinks = Query::new();
        let mut requests = Vec::new();
        if let Some(name) = ingredient.set_key(key.clone()) {
            requests.push(FetchRequest::Ingredient(name));
        }
        if let Some(name) = drinks.set_key(key) {
            requests.push(FetchRequest::Search(name));
        }

        (
            Self {
                name,
                ingredient,
                drinks,
            },
            requests,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolve_ingredient(
        &mut self,
        name: &str,
        result: Result<IngredientResponse, RequestFailure>,
    ) -> bool {
        self.ingredient.resolve(&name.to_string(), result)
    }

    pub fn resolve_drinks(
        &mut self,
        name: &str,
        result: Result<DrinksResponse<Drink>, RequestFailure>,
    ) -> bool {
        self.drinks.resolve(&name.to_string(), result)
    }

    pub fn view(&self) -> IngredientDetailView<'_> {
        if self.ingredient.is_loading() || self.drinks.is_loading() {
            return IngredientDetailView::Loading;
        }

        match (self.ingredient.data(), self.drinks.data()) {
            (Some(ingredient), Some(drinks)) => IngredientDetailView::Loaded {
                name: &self.name,
                ingredient: ingredient.ingredients.first(),
                drinks: drinks.drinks.as_slice(),
            },
            _ => IngredientDetailView::Failed,
        }
    }
}

impl Page for IngredientDetailState {
    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::Ingredient(name, result) => self.resolve_ingredient(&name, result),
            FetchOutcome::Search(name, result) => self.resolve_drinks(&name, result),
            _ => false,
        }
    }
}
