//! Reusable pieces shared by the page renderers.

use crate::model::Drink;
use crate::router::Route;

pub fn heading(text: &str) -> String {
    format!("{}\n{}\n", text, "=".repeat(text.chars().count()))
}

pub fn section(text: &str) -> String {
    format!("{}\n{}\n", text, "-".repeat(text.chars().count()))
}

pub fn badge(text: &str) -> String {
    format!("[{}]", text)
}

/// Square brackets for alcoholic drinks, parentheses for every other classification
pub fn classification_badge(label: &str, alcoholic: bool) -> String {
    if alcoholic {
        badge(label)
    } else {
        format!("({})", label)
    }
}

pub fn loading_indicator() -> String {
    "Loading...\n".to_string()
}

pub fn error_banner(title: &str, message: &str) -> String {
    format!("!! {}\n   {}\n", title, message)
}

pub fn back_action(label: &str, command: &str) -> String {
    format!("<- {} ({})\n", label, command)
}

/// Banner shown when a search comes back empty, with numbered suggestions
pub fn empty_search_banner(term: &str, suggestions: &[String]) -> String {
    let mut out = String::from("?? No cocktails found\n");
    out.push_str(&format!("   No cocktails found with \"{}\".\n", term));
    if !suggestions.is_empty() {
        out.push_str("   Try searching for popular ingredients like:\n   ");
        let items: Vec<String> = suggestions
            .iter()
            .enumerate()
            .map(|(i, name)| format!("[{}] {}", i + 1, name))
            .collect();
        out.push_str(&items.join("  "));
        out.push_str("\n   (suggest <n> to search)\n");
    }
    out
}

pub fn drink_card(position: usize, drink: &Drink) -> String {
    let mut out = format!("{:>4}. {}\n", position, drink.name);
    out.push_str(&format!(
        "      {}",
        Route::Drink(drink.id.clone())
    ));
    if !drink.thumbnail.is_empty() {
        out.push_str(&format!("  {}", drink.thumbnail));
    }
    out.push('\n');
    out
}

/// Numbered list of drink cards; positions start at 1
pub fn drinks_grid(drinks: &[Drink]) -> String {
    let mut out: String = drinks
        .iter()
        .enumerate()
        .map(|(i, drink)| drink_card(i + 1, drink))
        .collect();
    if !drinks.is_empty() {
        out.push_str("(open <n> to view a drink)\n");
    }
    out
}
