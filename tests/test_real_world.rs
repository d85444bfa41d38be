use cocktail_browser::{fetch_cocktail, search_cocktails};

#[tokio::test]
#[ignore] // This test requires network access
async fn test_margarita_lookup() {
    let _ = env_logger::try_init();

    match fetch_cocktail("11007").await {
        Ok(Some(drink)) => {
            println!("Found {}", drink.name);
            assert_eq!(drink.name, "Margarita");
            assert!(drink.ingredients().iter().any(|i| i.name == "Tequila"));
        }
        Ok(None) => panic!("Margarita is missing from the database"),
        Err(e) => panic!("Failed to fetch cocktail: {e}"),
    }
}

#[tokio::test]
#[ignore] // This test requires network access
async fn test_unknown_ingredient_search_is_absent() {
    let _ = env_logger::try_init();

    let response = search_cocktails("definitely-not-an-ingredient")
        .await
        .unwrap();
    assert!(!response.drinks.has_results());
}
