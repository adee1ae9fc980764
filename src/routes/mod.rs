//! HTTP handlers mapping service outcomes to the response envelope.

use actix_web::HttpResponse;
use serde::Deserialize;

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod cliente;
pub mod personal;

/// Raw `page` / `pageSize` query input. Kept as strings so the pagination
/// engine owns the parse-with-default step.
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Converts a service failure into the envelope the API promises.
///
/// Repository faults are logged here and leave the process as a generic
/// message with no internal detail.
pub(crate) fn error_response(operation: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(issues) => {
            HttpResponse::UnprocessableEntity().json(ErrorResponse::issues(issues))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ErrorResponse::message("Registro no encontrado"))
        }
        ServiceError::Repository(e) => {
            log::error!("{operation}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::message("Error interno del servidor"))
        }
    }
}
