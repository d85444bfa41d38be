use std::sync::Arc;
use std::time::Duration;

use cocktail_browser::session::Flow;
use cocktail_browser::{
    AppContext, BrowserConfig, CocktailDbClient, Command, FilterPreference, Route, Session,
};
use mockito::{Matcher, Mock, Server};

fn session_for(server: &Server) -> Session {
    let client = CocktailDbClient::builder()
        .base_url(server.url())
        .retry_attempts(0)
        .retry_delay(Duration::ZERO)
        .build()
        .unwrap();
    Session::new(AppContext::new(Arc::new(client), &BrowserConfig::default()))
}

async fn run(session: &mut Session, line: &str) {
    let command: Command = line.parse().unwrap();
    match session.handle(command).unwrap() {
        Flow::Continue(requests) => session.settle(requests).await,
        other => panic!("unexpected flow {:?}", other),
    }
}

async fn mock_json(server: &mut Server, path: &str, param: &str, value: &str, body: &str) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::UrlEncoded(param.into(), value.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

const GIN_DRINKS: &str = r#"{"drinks": [
    {"idDrink": "11003", "strDrink": "Negroni", "strDrinkThumb": "https://example.com/negroni.jpg"},
    {"idDrink": "11410", "strDrink": "Gin Fizz", "strDrinkThumb": "https://example.com/fizz.jpg"}
]}"#;

const NEGRONI: &str = r#"{"drinks": [{
    "idDrink": "11003",
    "strDrink": "Negroni",
    "strDrinkThumb": "https://example.com/negroni.jpg",
    "strAlcoholic": "Alcoholic",
    "strCategory": "Ordinary Drink",
    "strGlass": "Old-fashioned glass",
    "strInstructions": "Stir into glass over ice, garnish and serve.",
    "strIngredient1": "Gin",
    "strIngredient2": "Campari",
    "strIngredient3": "Sweet Vermouth",
    "strIngredient4": "",
    "strMeasure1": "1 oz ",
    "strMeasure2": "1 oz ",
    "strMeasure3": null
}]}"#;

#[tokio::test]
async fn test_search_without_results_shows_suggestions() {
    let mut server = Server::new_async().await;
    let _m = mock_json(
        &mut server,
        "/filter.php",
        "i",
        "vodka",
        r#"{"drinks": "None Found"}"#,
    )
    .await;

    let mut session = session_for(&server);
    run(&mut session, "search vodka").await;
    let page = session.render();

    assert!(page.contains("No cocktails found with \"vodka\""));
    assert!(page.contains("[1] vodka"));
    assert!(!page.contains("Showing"));
    assert!(!page.contains("!! Error"));
}

#[tokio::test]
async fn test_search_results_grid() {
    let mut server = Server::new_async().await;
    let _m = mock_json(&mut server, "/filter.php", "i", "Gin", GIN_DRINKS).await;

    let mut session = session_for(&server);
    run(&mut session, "search   Gin  ").await;
    let page = session.render();

    assert!(page.contains("Showing 2 results for \"Gin\""));
    assert!(page.contains("1. Negroni"));
    assert!(page.contains("/drink/11410"));
}

#[tokio::test]
async fn test_search_failure_shows_error_banner() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let mut session = session_for(&server);
    run(&mut session, "search rum").await;
    let page = session.render();

    assert!(page.contains("!! Error"));
    assert!(page.contains("Failed to fetch drinks"));
    assert!(!page.contains("Showing"));
}

#[tokio::test]
async fn test_empty_browse_shows_nothing() {
    let mut server = Server::new_async().await;
    let _m = mock_json(
        &mut server,
        "/filter.php",
        "a",
        "Non_Alcoholic",
        r#"{"drinks": "None Found"}"#,
    )
    .await;

    let mut session = session_for(&server);
    run(&mut session, "browse non-alcoholic").await;
    let page = session.render();

    assert!(page.contains("(*) Non-Alcoholic"));
    assert!(!page.contains("No cocktails found"));
    assert!(!page.contains("Showing"));
}

#[tokio::test]
async fn test_browse_uses_preference() {
    let mut server = Server::new_async().await;
    let mock = mock_json(&mut server, "/filter.php", "a", "Alcoholic", GIN_DRINKS).await;

    let mut session = session_for(&server);
    assert!(session.handle("browse".parse().unwrap()).is_err());

    run(&mut session, "prefer alcoholic").await;
    assert_eq!(session.context().filter_preference(), FilterPreference::Alcoholic);
    run(&mut session, "browse").await;

    assert!(session.render().contains("Showing 2 results - Alcoholic cocktails"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_drink_to_ingredient_and_back() {
    let mut server = Server::new_async().await;
    let search = mock_json(&mut server, "/filter.php", "i", "Gin", GIN_DRINKS).await;
    let _lookup = mock_json(&mut server, "/lookup.php", "i", "11003", NEGRONI).await;
    let _campari = mock_json(
        &mut server,
        "/search.php",
        "i",
        "Campari",
        r#"{"ingredients": [{"idIngredient": "113", "strIngredient": "Campari",
            "strDescription": "Campari is an Italian bitter.", "strType": "Bitter"}]}"#,
    )
    .await;
    let _campari_drinks = mock_json(
        &mut server,
        "/filter.php",
        "i",
        "Campari",
        r#"{"drinks": [{"idDrink": "11003", "strDrink": "Negroni", "strDrinkThumb": ""}]}"#,
    )
    .await;

    let mut session = session_for(&server);
    run(&mut session, "search Gin").await;
    run(&mut session, "open 1").await;

    assert_eq!(session.route(), &Route::Drink("11003".to_string()));
    let page = session.render();
    assert!(page.contains("[Alcoholic] [Ordinary Drink]"));
    assert!(page.contains("1. Gin - 1 oz\n"));
    assert!(page.contains("3. Sweet Vermouth\n"));
    assert!(!page.contains("4."));

    run(&mut session, "open 2").await;
    assert_eq!(session.route(), &Route::Ingredient("Campari".to_string()));
    let page = session.render();
    assert!(page.contains("Campari is an Italian bitter."));
    assert!(page.contains("Type: Bitter"));
    assert!(page.contains("Cocktails with Campari"));

    run(&mut session, "back").await;
    run(&mut session, "back").await;
    assert_eq!(session.route(), &Route::Home);
    assert!(session.render().contains("Showing 2 results for \"Gin\""));

    // the home page keeps its results across navigation
    search.assert_async().await;
}

#[tokio::test]
async fn test_unknown_drink_offers_home() {
    let mut server = Server::new_async().await;
    let _m = mock_json(&mut server, "/lookup.php", "i", "99999", r#"{"drinks": null}"#).await;

    let mut session = session_for(&server);
    run(&mut session, "go /drink/99999").await;
    let page = session.render();

    assert!(page.contains("Failed to load cocktail details."));
    assert!(page.contains("Back to Home (home)"));

    run(&mut session, "home").await;
    assert_eq!(session.route(), &Route::Home);
}

#[tokio::test]
async fn test_ingredient_page_fails_when_metadata_fails() {
    let mut server = Server::new_async().await;
    let _meta = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(502)
        .create_async()
        .await;
    let _drinks = mock_json(&mut server, "/filter.php", "i", "Gin", GIN_DRINKS).await;

    let mut session = session_for(&server);
    run(&mut session, "go /ingredient/Gin").await;

    assert!(session.render().contains("Failed to load ingredient details."));
}

#[tokio::test]
async fn test_suggestion_starts_search() {
    let mut server = Server::new_async().await;
    let mock = mock_json(&mut server, "/filter.php", "i", "gin", GIN_DRINKS).await;

    let mut session = session_for(&server);
    run(&mut session, "suggest 2").await;

    assert_eq!(session.home().search_term(), "gin");
    assert!(session.render().contains("Showing 2 results for \"gin\""));
    mock.assert_async().await;
}
