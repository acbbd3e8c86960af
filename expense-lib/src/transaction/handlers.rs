use crate::error::HandlerError;
use crate::tracing::record_resource_id;
use crate::transaction::TransactionPayload;
use actix_web::{web, HttpResponse, Responder};
use expense_repo::transaction_repo::{TransactionId, TransactionRepo};
use serde_json::json;
use std::sync::Arc;
use tracing_actix_web::RootSpan;

#[get("")]
pub async fn get_all_transactions(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
) -> Result<impl Responder, HandlerError> {
    let transactions = transaction_repo.get_all_transactions().await?;
    Ok(HttpResponse::Ok().json(transactions))
}

#[get("/{transaction_id}")]
pub async fn get_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<TransactionId>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    record_resource_id(&root_span, transaction_id);

    let transaction = transaction_repo.get_transaction(transaction_id).await?;
    Ok(HttpResponse::Ok().json(transaction))
}

#[post("")]
pub async fn create_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    payload: web::Json<TransactionPayload>,
) -> Result<impl Responder, HandlerError> {
    let new_transaction = payload.into_inner().validate()?;
    let transaction = transaction_repo
        .create_new_transaction(new_transaction)
        .await?;
    Ok(HttpResponse::Created().json(transaction))
}

#[put("/{transaction_id}")]
pub async fn update_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<TransactionId>,
    payload: web::Json<TransactionPayload>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    record_resource_id(&root_span, transaction_id);

    let updated_transaction = payload.into_inner().validate()?;
    let transaction = transaction_repo
        .update_transaction(transaction_id, updated_transaction)
        .await?;
    Ok(HttpResponse::Ok().json(transaction))
}

#[delete("/{transaction_id}")]
pub async fn delete_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<TransactionId>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    record_resource_id(&root_span, transaction_id);

    transaction_repo.delete_transaction(transaction_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Transaction deleted successfully" })))
}
