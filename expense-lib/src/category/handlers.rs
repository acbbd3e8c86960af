use crate::error::HandlerError;
use actix_web::{web, HttpResponse, Responder};
use expense_repo::category_repo::CategoryRepo;
use std::sync::Arc;

#[get("")]
pub async fn get_all_categories(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
) -> Result<impl Responder, HandlerError> {
    let categories = category_repo.get_all_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}
