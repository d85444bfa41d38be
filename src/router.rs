use std::fmt;
use std::str::FromStr;

use crate::error::CocktailError;

/// The three pages of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/drink/{id}`
    Drink(String),
    /// `/ingredient/{name}`
    Ingredient(String),
}

impl FromStr for Route {
    type Err = CocktailError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Home);
        }

        let (section, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));
        match section {
            "drink" if !rest.is_empty() && !rest.contains('/') => {
                Ok(Route::Drink(rest.to_string()))
            }
            "ingredient" if !rest.is_empty() && !rest.contains('/') => {
                Ok(Route::Ingredient(rest.to_string()))
            }
            _ => Err(CocktailError::UnknownRoute(path.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Drink(id) => write!(f, "/drink/{}", id),
            Route::Ingredient(name) => write!(f, "/ingredient/{}", name),
        }
    }
}

/// Navigation history. Never empty; the bottom entry is where the session started.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    pub fn new(start: Route) -> Self {
        Self {
            entries: vec![start],
        }
    }

    pub fn current(&self) -> &Route {
        // entries always holds at least the start route
        &self.entries[self.entries.len() - 1]
    }

    pub fn push(&mut self, route: Route) {
        self.entries.push(route);
    }

    /// Drop everything above the start entry and make it home
    pub fn go_home(&mut self) {
        self.entries.truncate(1);
        self.entries[0] = Route::Home;
    }

    /// Step back one entry. At the start of history this goes home instead.
    pub fn back(&mut self) -> &Route {
        if self.entries.len() > 1 {
            self.entries.pop();
        } else if self.entries[0] != Route::Home {
            self.entries[0] = Route::Home;
        }
        self.current()
    }

    /// Number of entries, including the start route
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
