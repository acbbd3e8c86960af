use crate::error::HandlerError;
use crate::tracing::record_resource_id;
use crate::user::is_valid_email;
use actix_web::{web, HttpResponse, Responder};
use expense_repo::user_repo::{NewUser, UserChanges, UserId, UserRepo};
use serde_json::json;
use std::sync::Arc;
use tracing_actix_web::RootSpan;

const INVALID_EMAIL: &str = "Invalid email format";

#[get("")]
pub async fn get_all_users(
    user_repo: web::Data<Arc<dyn UserRepo>>,
) -> Result<impl Responder, HandlerError> {
    let users = user_repo.get_all_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::Path<UserId>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let user_id = user_id.into_inner();
    record_resource_id(&root_span, user_id);

    let user = user_repo.get_user(user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[post("")]
pub async fn create_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    new_user: web::Json<NewUser>,
) -> Result<impl Responder, HandlerError> {
    let new_user = new_user.into_inner();
    if !is_valid_email(&new_user.email) {
        return Err(HandlerError::Validation(INVALID_EMAIL.to_owned()));
    }

    let user = user_repo.create_user(new_user).await?;
    Ok(HttpResponse::Created().json(user))
}

#[put("/{user_id}")]
pub async fn update_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::Path<UserId>,
    changes: web::Json<UserChanges>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let user_id = user_id.into_inner();
    record_resource_id(&root_span, user_id);

    let changes = changes.into_inner();
    if changes.is_empty() {
        return Err(HandlerError::NothingToUpdate);
    }

    let user = user_repo.update_user(user_id, changes).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::Path<UserId>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let user_id = user_id.into_inner();
    record_resource_id(&root_span, user_id);

    user_repo.delete_user(user_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "User deleted successfully" })))
}
