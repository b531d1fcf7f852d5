//! Responses for requests that match no route, or a route but not its method.

use picto_core::AppError;

use crate::error::HttpAppError;

pub async fn not_found() -> HttpAppError {
    AppError::NotFound("Not Found".to_string()).into()
}

pub async fn method_not_allowed() -> HttpAppError {
    AppError::MethodNotAllowed("Method Not Allowed".to_string()).into()
}
