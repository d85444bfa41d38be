use std::fmt;
use std::str::FromStr;

use super::query::Query;
use super::{FetchOutcome, FetchRequest, Page};
use crate::envelope::{Collection, DrinksResponse};
use crate::error::{CocktailError, RequestFailure};
use crate::model::{AlcoholicFilter, Drink};

/// Entry mode of the home page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Search,
    Browse,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Search => "Search by Ingredient",
            Tab::Browse => "Browse by Type",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = CocktailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(Tab::Search),
            "browse" => Ok(Tab::Browse),
            other => Err(CocktailError::InvalidArgument(format!(
                "unknown tab '{}', expected 'search' or 'browse'",
                other
            ))),
        }
    }
}

/// State of the home page: raw input, committed values and both queries.
///
/// At most one of {search term, alcoholic filter} is committed at a time;
/// every action that commits one clears the other.
#[derive(Debug, Default)]
pub struct HomeState {
    input: String,
    search_term: String,
    alcoholic_filter: Option<AlcoholicFilter>,
    active_tab: Tab,
    search: Query<String, DrinksResponse<Drink>>,
    browse: Query<AlcoholicFilter, DrinksResponse<Drink>>,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit the search box without committing anything
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Commit the trimmed input as the search term.
    ///
    /// Blank input is ignored.
    pub fn submit_search(&mut self) -> Vec<FetchRequest> {
        let term = self.input.trim().to_string();
        if term.is_empty() {
            return Vec::new();
        }
        self.search_term = term;
        self.alcoholic_filter = None;
        self.active_tab = Tab::Search;
        self.sync_queries()
    }

    /// Commit an alcoholic filter and leave search mode
    pub fn browse(&mut self, filter: AlcoholicFilter) -> Vec<FetchRequest> {
        self.alcoholic_filter = Some(filter);
        self.search_term.clear();
        self.input.clear();
        self.active_tab = Tab::Browse;
        self.sync_queries()
    }

    /// Search for a suggested ingredient from the empty-state banner
    pub fn search_suggestion(&mut self, ingredient: &str) -> Vec<FetchRequest> {
        self.input = ingredient.to_string();
        self.search_term = ingredient.to_string();
        self.alcoholic_filter = None;
        self.active_tab = Tab::Search;
        self.sync_queries()
    }

    pub fn clear_search(&mut self) -> Vec<FetchRequest> {
        self.input.clear();
        self.search_term.clear();
        self.sync_queries()
    }

    /// Switch tabs, dropping the other mode's committed value
    pub fn select_tab(&mut self, tab: Tab) -> Vec<FetchRequest> {
        self.active_tab = tab;
        match tab {
            Tab::Search => self.alcoholic_filter = None,
            Tab::Browse => self.search_term.clear(),
        }
        self.sync_queries()
    }

    pub fn resolve_search(
        &mut self,
        term: &str,
        result: Result<DrinksResponse<Drink>, RequestFailure>,
    ) -> bool {
        self.search.resolve(&term.to_string(), result)
    }

    pub fn resolve_browse(
        &mut self,
        filter: AlcoholicFilter,
        result: Result<DrinksResponse<Drink>, RequestFailure>,
    ) -> bool {
        self.browse.resolve(&filter, result)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn alcoholic_filter(&self) -> Option<AlcoholicFilter> {
        self.alcoholic_filter
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Re-key both queries from the committed values
    fn sync_queries(&mut self) -> Vec<FetchRequest> {
        let term = (!self.search_term.is_empty()).then(|| self.search_term.clone());

        let mut requests = Vec::new();
        if let Some(term) = self.search.set_key(term) {
            requests.push(FetchRequest::Search(term));
        }
        if let Some(filter) = self.browse.set_key(self.alcoholic_filter) {
            requests.push(FetchRequest::Browse(filter));
        }
        requests
    }

    /// Derive what the page shows from the current state
    pub fn view(&self) -> HomeView<'_> {
        let on_search_tab = self.active_tab == Tab::Search;
        let search_mode = !self.search_term.is_empty();
        let browse_mode = self.alcoholic_filter.is_some();

        let (collection, is_loading, error) = if on_search_tab {
            (
                self.search.data().map(|r| &r.drinks),
                self.search.is_loading(),
                self.search.error(),
            )
        } else {
            (
                self.browse.data().map(|r| &r.drinks),
                self.browse.is_loading(),
                self.browse.error(),
            )
        };

        let has_results = collection.is_some_and(Collection::has_results);
        let show_grid = !is_loading && has_results;
        let drinks: &[Drink] = match collection {
            Some(collection) if show_grid => collection.as_slice(),
            _ => &[],
        };

        let summary = show_grid.then(|| {
            let mut line = format!(
                "Showing {} result{}",
                drinks.len(),
                if drinks.len() != 1 { "s" } else { "" }
            );
            if on_search_tab && search_mode {
                line.push_str(&format!(" for \"{}\"", self.search_term));
            }
            if !on_search_tab {
                if let Some(filter) = self.alcoholic_filter {
                    line.push_str(&format!(" - {} cocktails", filter.label()));
                }
            }
            line
        });

        HomeView {
            active_tab: self.active_tab,
            input: &self.input,
            search_term: search_mode.then_some(self.search_term.as_str()),
            alcoholic_filter: self.alcoholic_filter,
            is_loading,
            error,
            drinks,
            has_results,
            show_empty_search_state: !is_loading && search_mode && !has_results && on_search_tab,
            show_results_container: error.is_some() || search_mode || browse_mode,
            summary,
        }
    }
}

impl Page for HomeState {
    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::Search(term, result) => self.resolve_search(&term, result),
            FetchOutcome::Browse(filter, result) => self.resolve_browse(filter, result),
            _ => false,
        }
    }
}

/// Everything the home page renders, derived from [`HomeState`]
#[derive(Debug, Clone)]
pub struct HomeView<'a> {
    pub active_tab: Tab,
    pub input: &'a str,
    /// Committed search term, if any
    pub search_term: Option<&'a str>,
    pub alcoholic_filter: Option<AlcoholicFilter>,
    pub is_loading: bool,
    pub error: Option<&'a RequestFailure>,
    /// Drinks for the grid; empty unless results are ready to show
    pub drinks: &'a [Drink],
    pub has_results: bool,
    pub show_empty_search_state: bool,
    pub show_results_container: bool,
    /// "Showing N results ..." line, present only alongside the grid
    pub summary: Option<String>,
}
