//! Plain-text rendering of the three pages.

pub mod fragments;

use fragments::{
    back_action, badge, classification_badge, drinks_grid, empty_search_banner, error_banner,
    heading, loading_indicator, section,
};

use crate::model::AlcoholicFilter;
use crate::router::Route;
use crate::views::{CocktailDetailView, HomeView, IngredientDetailView, Tab};

pub fn render_home(view: &HomeView<'_>, suggestions: &[String]) -> String {
    let mut out = heading("Cocktail Browser");
    out.push_str("Discover cocktails by ingredient or browse by type\n\n");

    let tabs: Vec<String> = [Tab::Search, Tab::Browse]
        .iter()
        .map(|tab| {
            if *tab == view.active_tab {
                format!("> {} <", tab.label())
            } else {
                format!("  {}  ", tab.label())
            }
        })
        .collect();
    out.push_str(&tabs.join("   "));
    out.push('\n');

    match view.active_tab {
        Tab::Search => {
            out.push_str("Search for cocktails containing a specific ingredient\n");
            if view.input.is_empty() {
                out.push_str("Search: (e.g., vodka, lemon, mint)\n");
            } else {
                out.push_str(&format!("Search: {}\n", view.input));
            }
        }
        Tab::Browse => {
            out.push_str("Browse all cocktails by alcoholic type\n");
            let options: Vec<String> = [AlcoholicFilter::Alcoholic, AlcoholicFilter::NonAlcoholic]
                .iter()
                .map(|filter| {
                    let mark = if view.alcoholic_filter == Some(*filter) { "*" } else { " " };
                    format!("({}) {}", mark, filter.label())
                })
                .collect();
            out.push_str(&options.join("   "));
            out.push('\n');
        }
    }

    if !view.show_results_container {
        return out;
    }

    out.push('\n');
    if view.is_loading {
        out.push_str(&loading_indicator());
    }
    if let Some(error) = view.error {
        out.push_str(&error_banner("Error", &error.to_string()));
    }
    if view.show_empty_search_state {
        if let Some(term) = view.search_term {
            out.push_str(&empty_search_banner(term, suggestions));
        }
    }
    if let Some(summary) = &view.summary {
        out.push_str(summary);
        out.push('\n');
        out.push_str(&drinks_grid(view.drinks));
    }
    out
}

pub fn render_cocktail_detail(view: &CocktailDetailView<'_>) -> String {
    match view {
        CocktailDetailView::Loading => loading_indicator(),
        CocktailDetailView::Failed => {
            let mut out = String::from("Failed to load cocktail details.\n");
            out.push_str(&back_action("Back to Home", "home"));
            out
        }
        CocktailDetailView::Loaded { drink, ingredients } => {
            let mut out = back_action("Back to Search", "home");
            out.push('\n');
            out.push_str(&heading(&drink.name));

            let mut badges = Vec::new();
            if let Some(alcoholic) = &drink.alcoholic {
                badges.push(classification_badge(alcoholic, drink.is_alcoholic()));
            }
            if let Some(category) = &drink.category {
                badges.push(badge(category));
            }
            if !badges.is_empty() {
                out.push_str(&badges.join(" "));
                out.push('\n');
            }
            if !drink.thumbnail.is_empty() {
                out.push_str(&format!("{}\n", drink.thumbnail));
            }

            if let Some(glass) = &drink.glass {
                out.push('\n');
                out.push_str(&section("Glass Type"));
                out.push_str(&format!("{}\n", glass));
            }

            out.push('\n');
            out.push_str(&section("Ingredients"));
            for (i, ingredient) in ingredients.iter().enumerate() {
                if ingredient.measure.is_empty() {
                    out.push_str(&format!("{:>4}. {}\n", i + 1, ingredient.name));
                } else {
                    out.push_str(&format!(
                        "{:>4}. {} - {}\n",
                        i + 1,
                        ingredient.name,
                        ingredient.measure.trim_end()
                    ));
                }
            }
            if !ingredients.is_empty() {
                out.push_str("(open <n> to view an ingredient)\n");
            }

            out.push('\n');
            out.push_str(&section("Instructions"));
            if let Some(instructions) = &drink.instructions {
                out.push_str(instructions.trim());
                out.push('\n');
            }
            out
        }
    }
}

pub fn render_ingredient_detail(view: &IngredientDetailView<'_>) -> String {
    match view {
        IngredientDetailView::Loading => loading_indicator(),
        IngredientDetailView::Failed => {
            let mut out = String::from("Failed to load ingredient details.\n");
            out.push_str(&back_action("Back to Home", "home"));
            out
        }
        IngredientDetailView::Loaded {
            name,
            ingredient,
            drinks,
        } => {
            let mut out = back_action("Back", "back");
            out.push('\n');
            out.push_str(&heading(name));

            if let Some(description) = ingredient.and_then(|i| i.description.as_deref()) {
                out.push_str(description.trim());
                out.push('\n');
            }
            if let Some(kind) = ingredient.and_then(|i| i.kind.as_deref()) {
                out.push_str(&format!("Type: {}\n", kind));
            }

            out.push('\n');
            out.push_str(&section(&format!("Cocktails with {}", name)));
            if drinks.is_empty() {
                out.push_str("No cocktails found with this ingredient.\n");
            } else {
                out.push_str(&drinks_grid(drinks));
            }
            out
        }
    }
}

/// Heading line naming the route being shown
pub fn route_banner(route: &Route) -> String {
    format!("-- {} --\n", route)
}
