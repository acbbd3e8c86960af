mod handlers;

use actix_web::{web, Scope};

pub fn category_service() -> Scope {
    web::scope("/categories").service(handlers::get_all_categories)
}
