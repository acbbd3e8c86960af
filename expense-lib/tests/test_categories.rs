use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::test::TestRequest;
use actix_web::App;
use expense_repo::category_repo::Category;
use expense_repo::Repos;
use rstest::rstest;
use serde_json::json;
use tracing::instrument;

use utils::repos;
use utils::tracing_setup;

#[macro_use]
mod utils;

#[instrument(skip(repos))]
#[rstest]
#[actix_rt::test]
async fn test_get_all_categories(_tracing_setup: &(), repos: Repos) {
    let service = test::init_service(build_app!(repos)).await;

    let request = TestRequest::get().uri("/api/categories").to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let categories: Vec<Category> = test::read_body_json(response).await;
    let names: Vec<Option<&str>> = categories.iter().map(|c| c.name.as_deref()).collect();
    assert_eq!(
        names,
        vec![Some("Food"), Some("Transport"), Some("Utilities")]
    );
}

#[rstest]
#[actix_rt::test]
async fn test_extra_columns_are_returned(_tracing_setup: &()) {
    let mut category = Category::new(7, "Travel");
    category.extra.insert("color".to_owned(), json!("blue"));
    let repos = expense_repo::mem_repo::create_repos_with_categories(vec![category]);
    let service = test::init_service(build_app!(repos)).await;

    let request = TestRequest::get().uri("/api/categories").to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body, json!([{ "id": 7, "name": "Travel", "color": "blue" }]));
}

#[rstest]
#[actix_rt::test]
async fn test_unnamed_category(_tracing_setup: &()) {
    let mut unnamed = Category::new(2, "Unused");
    unnamed.name = None;
    let repos =
        expense_repo::mem_repo::create_repos_with_categories(vec![Category::new(1, "Food"), unnamed]);
    let service = test::init_service(build_app!(repos)).await;

    let request = TestRequest::get().uri("/api/categories").to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!([{ "id": 1, "name": "Food" }, { "id": 2, "name": null }])
    );
}

#[rstest]
#[actix_rt::test]
async fn test_no_categories(_tracing_setup: &()) {
    let service = test::init_service(build_app!(expense_repo::mem_repo::create_repos())).await;

    let request = TestRequest::get().uri("/api/categories").to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body, json!([]));
}
