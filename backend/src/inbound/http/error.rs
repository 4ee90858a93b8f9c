//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn any fault into a JSON body and status code. The status is
//! chosen by [`FaultClass`], never by individual fault codes.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::warn;

use crate::domain::{Error, FaultClass, FaultCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(class: FaultClass) -> StatusCode {
    match class {
        FaultClass::BadInput => StatusCode::BAD_REQUEST,
        FaultClass::NotFound => StatusCode::NOT_FOUND,
        FaultClass::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        FaultClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.class())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(self.redacted())
    }
}

/// Error handler for `web::JsonConfig`: undecodable bodies become
/// [`FaultCode::MalformedRequestBody`] instead of Actix's plain-text 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected malformed JSON body");
    Error::from(FaultCode::MalformedRequestBody)
        .with_details(json!({ "reason": err.to_string() }))
        .into()
}

/// JSON extractor configuration shared by every route taking a body.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
