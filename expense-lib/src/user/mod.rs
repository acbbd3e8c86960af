use actix_web::{web, Scope};
use once_cell::sync::Lazy;
use regex::Regex;

mod handlers;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// One `@` with something on each side, and a dot somewhere after it
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn user_service() -> Scope {
    web::scope("/users")
        .service(handlers::get_all_users)
        .service(handlers::get_user)
        .service(handlers::create_user)
        .service(handlers::update_user)
        .service(handlers::delete_user)
}
