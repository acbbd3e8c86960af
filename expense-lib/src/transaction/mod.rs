use crate::error::HandlerError;
use actix_web::{web, Scope};
use chrono::NaiveDate;
use expense_repo::transaction_repo::NewTransaction;
use expense_repo::user_repo::UserId;
use rust_decimal::Decimal;
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};

mod handlers;

const MISSING_FIELDS: &str = "user_id, amount, category_id and date are required";

pub fn transaction_service() -> Scope {
    web::scope("/transactions")
        .service(handlers::get_all_transactions)
        .service(handlers::get_transaction)
        .service(handlers::create_transaction)
        .service(handlers::update_transaction)
        .service(handlers::delete_transaction)
}

/// Request body for creating or replacing a transaction.
///
/// Required fields are optional here so that a missing, `null` or blank value produces the
/// transaction-specific 400 message instead of a JSON parse error.
#[derive(Deserialize, Debug, Default)]
pub struct TransactionPayload {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub user_id: Option<UserId>,
    #[serde(default, deserialize_with = "amount_or_none")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category_id: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<NaiveDate>,
}

impl TransactionPayload {
    /// Zero counts as missing for the id fields. A zero amount has already been dropped during
    /// deserialization if it was sent as a JSON number.
    pub fn validate(self) -> Result<NewTransaction, HandlerError> {
        let missing = || HandlerError::Validation(MISSING_FIELDS.to_owned());

        let user_id = self.user_id.filter(|id| *id != 0).ok_or_else(missing)?;
        let amount = self.amount.ok_or_else(missing)?;
        let category_id = self.category_id.filter(|id| *id != 0).ok_or_else(missing)?;
        let date = self.date.ok_or_else(missing)?;

        Ok(NewTransaction::new(
            user_id,
            amount,
            self.description,
            category_id,
            date,
        ))
    }
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) if s.is_empty() => Ok(None),
        value => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}

/// Like [blank_as_none], and a JSON number equal to zero is also `None`. A non-empty string
/// such as `"0"` is kept.
fn amount_or_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let numeric = value.is_number();
    let amount: Option<Decimal> = blank_as_none(value).map_err(D::Error::custom)?;
    Ok(amount.filter(|a| !(numeric && a.is_zero())))
}
