use expense_repo::category_repo::Category;
use expense_repo::Repos;
use rstest::*;
use tracing::info;
use tracing::Level;

pub mod failing;

macro_rules! build_app {
    ($repos:expr) => {
        build_app!($repos, expense_lib::error::ErrorReporting::Generic)
    };
    ($repos:expr, $reporting:expr) => {{
        let app = App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .wrap(expense_lib::error::error_reporting($reporting))
            .configure(expense_lib::app_config_func($repos));
        tracing::info!("Built app");
        app
    }};
}

#[allow(unused_macros)]
macro_rules! create_user {
    (&$service:ident, $new_user:expr) => {{
        let request = TestRequest::post()
            .uri("/api/users")
            .set_json(&$new_user)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "Got {} response when creating user",
            response.status()
        );
        test::read_body_json(response).await
    }};
}

#[allow(unused_macros)]
macro_rules! create_transaction {
    (&$service:ident, $body:expr) => {{
        let request = TestRequest::post()
            .uri("/api/transactions")
            .set_json(&$body)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "Got {} response when creating transaction",
            response.status()
        );
        test::read_body_json(response).await
    }};
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repos() -> Repos {
    expense_repo::mem_repo::create_repos_with_categories(vec![
        Category::new(1, "Food"),
        Category::new(2, "Transport"),
        Category::new(3, "Utilities"),
    ])
}
