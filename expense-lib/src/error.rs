use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use expense_repo::category_repo::CategoryRepoError;
use expense_repo::transaction_repo::TransactionRepoError;
use expense_repo::user_repo::UserRepoError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// A user update without any known field. Answered with 404, not 400, as existing
    /// clients expect.
    #[error("No valid fields to update")]
    NothingToUpdate,
    /// Database connectivity probe failed. Always reported with the driver message.
    #[error("{}", .0.root_cause())]
    Connectivity(anyhow::Error),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl HandlerError {
    /// The driver message behind an unexpected error, for development builds
    fn detail(&self) -> Option<String> {
        match self {
            HandlerError::Unexpected(e) => Some(e.root_cause().to_string()),
            _ => None,
        }
    }
}

impl From<UserRepoError> for HandlerError {
    fn from(e: UserRepoError) -> Self {
        match e {
            UserRepoError::UserNotFound(_) => HandlerError::NotFound("User not found".to_owned()),
            UserRepoError::NothingToUpdate(_) => HandlerError::NothingToUpdate,
            UserRepoError::Other(e) => HandlerError::Unexpected(e),
        }
    }
}

impl From<TransactionRepoError> for HandlerError {
    fn from(e: TransactionRepoError) -> Self {
        match e {
            TransactionRepoError::TransactionNotFound(_) => {
                HandlerError::NotFound("Transaction not found".to_owned())
            }
            TransactionRepoError::Other(e) => HandlerError::Unexpected(e),
        }
    }
}

impl From<CategoryRepoError> for HandlerError {
    fn from(e: CategoryRepoError) -> Self {
        match e {
            CategoryRepoError::Other(e) => HandlerError::Unexpected(e),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::Validation(_) => StatusCode::BAD_REQUEST,
            HandlerError::NotFound(_) | HandlerError::NothingToUpdate => StatusCode::NOT_FOUND,
            HandlerError::Connectivity(_) | HandlerError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let message = match self {
            HandlerError::Unexpected(e) => {
                error!(error = ?e, "Database error");
                GENERIC_ERROR_MESSAGE.to_owned()
            }
            HandlerError::Connectivity(e) => {
                error!(error = ?e, "Database connectivity check failed");
                self.to_string()
            }
            _ => self.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { error: message })
    }
}

/// How much of an unexpected error is shown to clients
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorReporting {
    /// Driver messages are passed through
    Verbose,
    /// Every unexpected error reads [GENERIC_ERROR_MESSAGE]
    Generic,
}

/// Middleware that rewrites the body of 500 responses according to `reporting`
pub fn error_reporting<B: 'static>(reporting: ErrorReporting) -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, move |res| {
        report_internal_error(res, reporting)
    })
}

fn report_internal_error<B>(
    res: ServiceResponse<B>,
    reporting: ErrorReporting,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let detail = match reporting {
        ErrorReporting::Generic => None,
        ErrorReporting::Verbose => res
            .response()
            .error()
            .and_then(|e| e.as_error::<HandlerError>())
            .and_then(HandlerError::detail),
    };
    let Some(detail) = detail else {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };

    let (req, res) = res.into_parts();
    let res = HttpResponse::build(res.status()).json(ErrorBody { error: detail });
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    error!(req_path = req.path(), %err);
    match err {
        JsonPayloadError::Deserialize(deserialize_err) => {
            let error_body = serde_json::json!({
                "error": "Unable to parse JSON payload",
                "detail": format!("{}", deserialize_err),
            });
            actix_web::error::InternalError::from_response(
                deserialize_err,
                HttpResponse::BadRequest()
                    .content_type("application/json")
                    .body(error_body.to_string()),
            )
            .into()
        }
        _ => err.into(),
    }
}
