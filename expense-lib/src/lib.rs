#[macro_use(delete, get, post, put)]
extern crate actix_web;

use actix_web::web;
use actix_web::web::Data;
use expense_repo::Repos;

pub mod category;
pub mod config;
pub mod error;
pub mod health;
pub mod tracing;
pub mod transaction;
pub mod user;

/// Registers the repositories and every route of the API on an `App`
pub fn app_config_func(repos: Repos) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(Data::new(repos.users))
            .app_data(Data::new(repos.categories))
            .app_data(Data::new(repos.transactions))
            .app_data(Data::new(repos.health))
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .configure(health::health_service)
            .service(
                web::scope("/api")
                    .service(category::category_service())
                    .service(user::user_service())
                    .service(transaction::transaction_service()),
            );
    }
}
