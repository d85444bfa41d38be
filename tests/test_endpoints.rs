use std::time::Duration;

use cocktail_browser::{
    AlcoholicFilter, CocktailApi, CocktailDbClient, Collection, Endpoint,
};
use mockito::{Matcher, Server};

fn client_for(server: &Server) -> CocktailDbClient {
    CocktailDbClient::builder()
        .base_url(server.url())
        .retry_attempts(0)
        .retry_delay(Duration::ZERO)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_text_sentinel_becomes_absent() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "vodka".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"drinks": "None Found"}"#)
        .create_async()
        .await;

    let response = client_for(&server).search_by_ingredient("vodka").await.unwrap();

    assert_eq!(response.drinks, Collection::Absent);
    assert!(!response.drinks.has_results());
}

#[tokio::test]
async fn test_null_and_missing_drinks_become_absent() {
    let mut server = Server::new_async().await;
    let _null = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "0".into()))
        .with_status(200)
        .with_body(r#"{"drinks": null}"#)
        .create_async()
        .await;
    let _missing = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "1".into()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.get_drink_by_id("0").await.unwrap().drinks.is_absent());
    assert!(client.get_drink_by_id("1").await.unwrap().drinks.is_absent());
}

#[tokio::test]
async fn test_browse_sends_underscored_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("a".into(), "Non_Alcoholic".into()))
        .with_status(200)
        .with_body(
            r#"{"drinks": [
                {"idDrink": "12560", "strDrink": "Afterglow", "strDrinkThumb": "a.jpg"},
                {"idDrink": "12562", "strDrink": "Alice Cocktail", "strDrinkThumb": null}
            ]}"#,
        )
        .create_async()
        .await;

    let response = client_for(&server)
        .filter_by_alcoholic(AlcoholicFilter::NonAlcoholic)
        .await
        .unwrap();

    let drinks = response.drinks.as_slice();
    assert_eq!(drinks.len(), 2);
    assert_eq!(drinks[0].name, "Afterglow");
    assert_eq!(drinks[1].thumbnail, "");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_drink_detail_pairs_ingredients_with_measures() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "11007".into()))
        .with_status(200)
        .with_body(
            r#"{"drinks": [{
                "idDrink": "11007",
                "strDrink": "Margarita",
                "strDrinkThumb": "https://example.com/margarita.jpg",
                "strAlcoholic": "Alcoholic",
                "strGlass": "Cocktail glass",
                "strInstructions": "Rub the rim of the glass with the lime slice.",
                "strIngredient1": "Tequila",
                "strIngredient2": "Triple sec",
                "strIngredient3": "Lime juice",
                "strIngredient4": "Salt",
                "strIngredient5": null,
                "strMeasure1": "1 1/2 oz ",
                "strMeasure2": "1/2 oz ",
                "strMeasure3": "1 oz ",
                "strMeasure4": null
            }]}"#,
        )
        .create_async()
        .await;

    let response = client_for(&server).get_drink_by_id("11007").await.unwrap();
    let drink = response.drinks.first().unwrap();
    let ingredients = drink.ingredients();

    assert_eq!(ingredients.len(), 4);
    assert_eq!(ingredients[0].name, "Tequila");
    assert_eq!(ingredients[0].measure, "1 1/2 oz ");
    assert_eq!(ingredients[3].name, "Salt");
    assert_eq!(ingredients[3].measure, "");
    assert!(drink.is_alcoholic());
}

#[tokio::test]
async fn test_ingredient_lookup() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("i".into(), "Gin".into()))
        .with_status(200)
        .with_body(
            r#"{"ingredients": [{
                "idIngredient": "2",
                "strIngredient": "Gin",
                "strDescription": "Gin is a distilled alcoholic drink.",
                "strType": "Gin",
                "strAlcohol": "Yes",
                "strABV": "40"
            }]}"#,
        )
        .create_async()
        .await;

    let response = client_for(&server).get_ingredient_by_name("Gin").await.unwrap();
    let ingredient = response.ingredients.first().unwrap();

    assert_eq!(ingredient.id, "2");
    assert_eq!(ingredient.kind.as_deref(), Some("Gin"));
}

#[tokio::test]
async fn test_failure_carries_endpoint_message() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let failure = client_for(&server)
        .get_ingredient_by_name("Unobtainium")
        .await
        .unwrap_err();

    assert_eq!(failure.endpoint, Endpoint::IngredientByName);
    assert_eq!(failure.status, Some(404));
    assert!(failure.to_string().starts_with("Failed to fetch ingredient"));
}

#[tokio::test]
async fn test_malformed_body_is_a_failure() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let failure = client_for(&server)
        .search_by_ingredient("Gin")
        .await
        .unwrap_err();

    assert_eq!(failure.endpoint, Endpoint::SearchByIngredient);
    assert_eq!(failure.status, None);
}
