#![allow(dead_code)]

use chef_book::{ApiKey, ChefBook, SpoonacularClient};
use mockito::{Matcher, Mock, ServerGuard};

pub const TEST_API_KEY: &str = "test-key";

pub const PANCAKES_JSON: &str = r#"{
    "id": 42,
    "title": "Pancakes",
    "image": "url",
    "readyInMinutes": 20,
    "servings": 4,
    "analyzedInstructions": [
        {"name": "", "steps": [
            {"number": 1, "step": "Mix."},
            {"number": 2, "step": "Cook."}
        ]}
    ]
}"#;

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub fn client_for(server: &ServerGuard) -> SpoonacularClient {
    SpoonacularClient::with_base_url(server.url(), ApiKey::new(TEST_API_KEY))
}

pub fn book_with(ingredients: &[&str]) -> ChefBook {
    let mut book = ChefBook::new();
    for ingredient in ingredients {
        book.update_input(*ingredient);
        book.submit_input();
    }
    book
}

pub fn search_query(csv: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("ingredients".into(), csv.into()),
        Matcher::UrlEncoded("number".into(), "6".into()),
        Matcher::UrlEncoded("apiKey".into(), TEST_API_KEY.into()),
    ])
}

pub fn detail_query() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("apiKey".into(), TEST_API_KEY.into()),
        Matcher::UrlEncoded("includeNutrition".into(), "false".into()),
    ])
}

/// Search mock answering `body` for the given ingredient CSV, expected `hits` times.
pub async fn mock_search(server: &mut ServerGuard, csv: &str, body: &str, hits: usize) -> Mock {
    server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(search_query(csv))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}

/// Detail mock for one recipe id.
pub async fn mock_detail(server: &mut ServerGuard, id: i64, body: &str, hits: usize) -> Mock {
    server
        .mock("GET", format!("/recipes/{}/information", id).as_str())
        .match_query(detail_query())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}

/// Matches a detail request for any recipe id.
pub async fn mock_any_detail(server: &mut ServerGuard, body: &str, hits: usize) -> Mock {
    server
        .mock("GET", Matcher::Regex(r"^/recipes/\d+/information(\?.*)?$".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}
