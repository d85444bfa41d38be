use super::query::Query;
use super::{FetchOutcome, FetchRequest, Page};
use crate::envelope::DrinksResponse;
use crate::error::RequestFailure;
use crate::model::{DrinkDetail, IngredientWithMeasure};

/// State of the `/drink/{id}` page
#[derive(Debug)]
pub struct CocktailDetailState {
    id: String,
    lookup: Query<String, DrinksResponse<DrinkDetail>>,
}

/// What the drink page renders
#[derive(Debug, Clone)]
pub enum CocktailDetailView<'a> {
    Loading,
    /// Request failed, or the lookup returned no drink
    Failed,
    Loaded {
        drink: &'a DrinkDetail,
        ingredients: Vec<IngredientWithMeasure>,
    },
}

impl CocktailDetailState {
    /// Open the page for `id` and return the lookup to issue
    pub fn open(id: impl Into<String>) -> (Self, Vec<FetchRequest>) {
        let id = id.into();
        let mut lookup = Query::new();
        let requests = lookup
            .set_key((!id.is_empty()).then(|| id.clone()))
            .map(FetchRequest::Drink)
            .into_iter()
            .collect();
        (Self { id, lookup }, requests)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn resolve(
        &mut self,
        id: &str,
        result: Result<DrinksResponse<DrinkDetail>, RequestFailure>,
    ) -> bool {
        self.lookup.resolve(&id.to_string(), result)
    }

    pub fn view(&self) -> CocktailDetailView<'_> {
        if self.lookup.is_loading() {
            return CocktailDetailView::Loading;
        }

        match self.lookup.data().and_then(|response| response.drinks.first()) {
            Some(drink) => CocktailDetailView::Loaded {
                drink,
                ingredients: drink.ingredients(),
            },
            None => CocktailDetailView::Failed,
        }
    }
}

impl Page for CocktailDetailState {
    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::Drink(id, result) => self.resolve(&id, result),
            _ => false,
        }
    }
}
