use crate::error::HandlerError;
use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use expense_repo::HealthCheck;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Serialize)]
struct DatabaseTime {
    now: DateTime<Utc>,
}

#[derive(Serialize)]
struct DatabaseStatus {
    message: &'static str,
    timestamp: DatabaseTime,
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Expense Tracker API is running!" }))
}

#[get("/test-db")]
pub async fn test_db(
    health_check: web::Data<Arc<dyn HealthCheck>>,
) -> Result<impl Responder, HandlerError> {
    let now = health_check
        .check()
        .await
        .map_err(HandlerError::Connectivity)?;
    Ok(HttpResponse::Ok().json(DatabaseStatus {
        message: "Database connected!",
        timestamp: DatabaseTime { now },
    }))
}
