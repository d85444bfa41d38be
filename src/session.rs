//! Navigation and page state for one user session, independent of any I/O.

use std::str::FromStr;
use std::sync::Arc;

use log::debug;

use crate::client::CocktailApi;
use crate::context::{AppContext, FilterPreference};
use crate::error::CocktailError;
use crate::model::AlcoholicFilter;
use crate::render;
use crate::router::{History, Route};
use crate::views::{
    self, CocktailDetailState, CocktailDetailView, FetchOutcome, FetchRequest, HomeState,
    IngredientDetailState, IngredientDetailView, Page, Tab,
};

pub const HELP: &str = "\
Commands:
  search <ingredient>          search cocktails by ingredient
  browse [alcoholic|non-alcoholic]
                               browse by type (defaults to your preference)
  tab <search|browse>          switch the home page tab
  input <text>                 type into the search box without searching
  clear                        clear the search
  suggest <n>                  search the n-th suggested ingredient
  open <n>                     open the n-th drink or ingredient on the page
  go <path>                    open a route: /, /drink/<id>, /ingredient/<name>
  back                         previous page
  home                         home page
  prefer <all|alcoholic|non-alcoholic>
                               set the default browse filter
  help                         show this help
  quit                         leave
";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Browse(Option<AlcoholicFilter>),
    Tab(Tab),
    Input(String),
    Clear,
    Suggest(usize),
    Open(usize),
    Go(Route),
    Back,
    Home,
    Prefer(FilterPreference),
    Help,
    Quit,
}

fn position(argument: &str) -> Result<usize, CocktailError> {
    match argument.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CocktailError::InvalidArgument(format!(
            "expected a position starting at 1, got '{}'",
            argument.trim()
        ))),
    }
}

/// Element at a 1-based position
fn nth<T>(items: &[T], n: usize) -> Option<&T> {
    n.checked_sub(1).and_then(|i| items.get(i))
}

fn required<'a>(command: &str, argument: &'a str) -> Result<&'a str, CocktailError> {
    let argument = argument.trim();
    if argument.is_empty() {
        return Err(CocktailError::InvalidArgument(format!(
            "'{}' needs an argument (see 'help')",
            command
        )));
    }
    Ok(argument)
}

impl FromStr for Command {
    type Err = CocktailError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, argument) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match name.to_ascii_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(required(name, argument)?.to_string())),
            "browse" | "b" => match argument.trim() {
                "" => Ok(Command::Browse(None)),
                filter => Ok(Command::Browse(Some(filter.parse()?))),
            },
            "tab" => Ok(Command::Tab(required(name, argument)?.parse()?)),
            "input" => Ok(Command::Input(argument.trim().to_string())),
            "clear" => Ok(Command::Clear),
            "suggest" => Ok(Command::Suggest(position(argument)?)),
            "open" | "o" => Ok(Command::Open(position(argument)?)),
            "go" => Ok(Command::Go(required(name, argument)?.parse()?)),
            "back" => Ok(Command::Back),
            "home" => Ok(Command::Home),
            "prefer" => Ok(Command::Prefer(required(name, argument)?.parse()?)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CocktailError::InvalidArgument(format!(
                "unknown command '{}' (see 'help')",
                other
            ))),
        }
    }
}

/// Result of handling a command
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep going; issue these requests
    Continue(Vec<FetchRequest>),
    ShowHelp,
    Quit,
}

#[derive(Debug)]
enum DetailPage {
    None,
    Cocktail(CocktailDetailState),
    Ingredient(IngredientDetailState),
}

/// Everything a user session holds: context, history and page state.
///
/// The home page keeps its state while detail pages are visited; detail
/// pages are rebuilt every time they are entered.
pub struct Session {
    context: AppContext,
    history: History,
    home: HomeState,
    page: DetailPage,
}

impl Session {
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            history: History::default(),
            home: HomeState::new(),
            page: DetailPage::None,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn api(&self) -> Arc<dyn CocktailApi> {
        Arc::clone(self.context.api())
    }

    pub fn route(&self) -> &Route {
        self.history.current()
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    /// Perform a command and return what to do next
    pub fn handle(&mut self, command: Command) -> Result<Flow, CocktailError> {
        debug!("Handling {:?} on {}", command, self.route());

        let requests = match command {
            Command::Search(text) => {
                let mut requests = self.ensure_home();
                self.home.set_input(text);
                requests.extend(self.home.submit_search());
                requests
            }
            Command::Browse(filter) => {
                let filter = filter
                    .or_else(|| self.context.filter_preference().as_filter())
                    .ok_or_else(|| {
                        CocktailError::InvalidArgument(
                            "browse needs 'alcoholic' or 'non-alcoholic', or set one with 'prefer'"
                                .to_string(),
                        )
                    })?;
                let mut requests = self.ensure_home();
                requests.extend(self.home.browse(filter));
                requests
            }
            Command::Tab(tab) => {
                let mut requests = self.ensure_home();
                requests.extend(self.home.select_tab(tab));
                requests
            }
            Command::Input(text) => {
                let requests = self.ensure_home();
                self.home.set_input(text);
                requests
            }
            Command::Clear => {
                let mut requests = self.ensure_home();
                requests.extend(self.home.clear_search());
                requests
            }
            Command::Suggest(n) => {
                let ingredient = nth(self.context.popular_ingredients(), n)
                    .cloned()
                    .ok_or_else(|| {
                        CocktailError::InvalidArgument(format!("no suggestion number {}", n))
                    })?;
                let mut requests = self.ensure_home();
                requests.extend(self.home.search_suggestion(&ingredient));
                requests
            }
            Command::Open(n) => {
                let route = self.link(n)?;
                self.navigate(route)
            }
            Command::Go(route) => self.navigate(route),
            Command::Back => {
                let route = self.history.back().clone();
                self.enter(route)
            }
            Command::Home => self.navigate(Route::Home),
            Command::Prefer(preference) => {
                self.context.set_filter_preference(preference);
                Vec::new()
            }
            Command::Help => return Ok(Flow::ShowHelp),
            Command::Quit => return Ok(Flow::Quit),
        };

        Ok(Flow::Continue(requests))
    }

    /// Push `route` onto the history and enter it. Going home starts the
    /// history over.
    pub fn navigate(&mut self, route: Route) -> Vec<FetchRequest> {
        if route == Route::Home {
            self.history.go_home();
        } else {
            self.history.push(route.clone());
        }
        self.enter(route)
    }

    fn ensure_home(&mut self) -> Vec<FetchRequest> {
        if *self.route() == Route::Home {
            Vec::new()
        } else {
            self.navigate(Route::Home)
        }
    }

    fn enter(&mut self, route: Route) -> Vec<FetchRequest> {
        match route {
            Route::Home => {
                self.page = DetailPage::None;
                Vec::new()
            }
            Route::Drink(id) => {
                let (state, requests) = CocktailDetailState::open(id);
                self.page = DetailPage::Cocktail(state);
                requests
            }
            Route::Ingredient(name) => {
                let (state, requests) = IngredientDetailState::open(name);
                self.page = DetailPage::Ingredient(state);
                requests
            }
        }
    }

    /// Route behind the n-th numbered entry of the current page
    fn link(&self, n: usize) -> Result<Route, CocktailError> {
        let missing = || CocktailError::InvalidArgument(format!("nothing to open at {}", n));

        match &self.page {
            DetailPage::None => {
                let view = self.home.view();
                let drink = nth(view.drinks, n).ok_or_else(missing)?;
                Ok(Route::Drink(drink.id.clone()))
            }
            DetailPage::Cocktail(state) => match state.view() {
                CocktailDetailView::Loaded { ingredients, .. } => {
                    let ingredient = nth(&ingredients, n).ok_or_else(missing)?;
                    Ok(Route::Ingredient(ingredient.name.clone()))
                }
                _ => Err(missing()),
            },
            DetailPage::Ingredient(state) => match state.view() {
                IngredientDetailView::Loaded { drinks, .. } => {
                    let drink = nth(drinks, n).ok_or_else(missing)?;
                    Ok(Route::Drink(drink.id.clone()))
                }
                _ => Err(missing()),
            },
        }
    }

    /// Issue requests and apply their outcomes one after another
    pub async fn settle(&mut self, requests: Vec<FetchRequest>) {
        let api = self.api();
        views::settle(api.as_ref(), self, requests).await;
    }

    /// Render the current page
    pub fn render(&self) -> String {
        let mut out = render::route_banner(self.route());
        let page = match &self.page {
            DetailPage::None => {
                render::render_home(&self.home.view(), self.context.popular_ingredients())
            }
            DetailPage::Cocktail(state) => render::render_cocktail_detail(&state.view()),
            DetailPage::Ingredient(state) => render::render_ingredient_detail(&state.view()),
        };
        out.push_str(&page);
        out
    }
}

impl Page for Session {
    /// Feed an outcome to the home page and the open detail page; true when
    /// the visible page changed.
    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        let home_changed = self.home.apply(outcome.clone());
        match &mut self.page {
            DetailPage::None => home_changed,
            DetailPage::Cocktail(state) => state.apply(outcome),
            DetailPage::Ingredient(state) => state.apply(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrowserConfig;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "search light rum".parse::<Command>().unwrap(),
            Command::Search("light rum".to_string())
        );
        assert_eq!("browse".parse::<Command>().unwrap(), Command::Browse(None));
        assert_eq!(
            "b non-alcoholic".parse::<Command>().unwrap(),
            Command::Browse(Some(AlcoholicFilter::NonAlcoholic))
        );
        assert_eq!("open 3".parse::<Command>().unwrap(), Command::Open(3));
        assert_eq!(
            "go /drink/11007".parse::<Command>().unwrap(),
            Command::Go(Route::Drink("11007".to_string()))
        );
        assert_eq!("tab browse".parse::<Command>().unwrap(), Command::Tab(Tab::Browse));
        assert_eq!("QUIT".parse::<Command>().unwrap(), Command::Quit);
    }

    fn session() -> Session {
        Session::new(AppContext::from_config(&BrowserConfig::default()).unwrap())
    }

    #[test]
    fn test_zero_position_is_rejected() {
        let mut session = session();
        assert!(session.handle(Command::Open(0)).is_err());
        assert!(session.handle(Command::Suggest(0)).is_err());
        assert!(session.handle(Command::Suggest(99)).is_err());
        assert_eq!(session.route(), &Route::Home);
    }

    #[test]
    fn test_zero_position_on_detail_page_is_rejected() {
        let mut session = session();
        session.handle(Command::Go(Route::Drink("11007".to_string()))).unwrap();
        assert!(session.handle(Command::Open(0)).is_err());
        assert_eq!(session.route(), &Route::Drink("11007".to_string()));
    }

    #[test]
    fn test_history_stays_bounded_across_home_trips() {
        let mut session = session();
        for id in ["1", "2", "3"] {
            session.handle(Command::Go(Route::Drink(id.to_string()))).unwrap();
            session.handle(Command::Home).unwrap();
            session.handle(Command::Search("gin".to_string())).unwrap();
        }
        assert_eq!(session.history.depth(), 1);

        session.handle(Command::Go(Route::Drink("4".to_string()))).unwrap();
        session.handle(Command::Back).unwrap();
        assert_eq!(session.route(), &Route::Home);
        assert_eq!(session.history.depth(), 1);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("search".parse::<Command>().is_err());
        assert!("open 0".parse::<Command>().is_err());
        assert!("open two".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
        assert!("go /nowhere".parse::<Command>().is_err());
    }
}
