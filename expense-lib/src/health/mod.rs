mod handlers;

use actix_web::web;

/// `/` and `/test-db` live at the root, outside `/api`
pub fn health_service(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::index).service(handlers::test_db);
}
