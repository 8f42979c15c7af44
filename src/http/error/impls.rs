use actix_web::{body::BoxBody, http::StatusCode, HttpResponse};
use error_stack::Report;
use serde_json::{json, Value};

use super::Error;
use crate::{store, types::Error as ErrorType, util::sanitize::InvalidEmail};

impl actix_web::ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.error_type {
            ErrorType::AccountExists => StatusCode::CONFLICT,
            ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::InvalidFormBody(..) => StatusCode::BAD_REQUEST,
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::SessionRejected => StatusCode::FORBIDDEN,
            ErrorType::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        tracing::error!(error = %self, "request failed");

        // The taxonomy variant plus its human message; the report and
        // trace stay in the log line above.
        let mut body =
            serde_json::to_value(&self.error_type).unwrap_or_else(|_| json!({ "type": "internal" }));
        if let Value::Object(map) = &mut body {
            map.insert("message".into(), json!(self.error_type.to_string()));
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<Report<store::Error>> for Error {
    fn from(value: Report<store::Error>) -> Self {
        Error::from_report(ErrorType::Internal, value)
    }
}

impl From<validator::ValidateError> for Error {
    fn from(value: validator::ValidateError) -> Self {
        #[derive(Debug, thiserror::Error)]
        #[error("Validation error occurred")]
        struct ValidateError;
        Error::from_context(ErrorType::InvalidFormBody(value), ValidateError)
    }
}

impl From<InvalidEmail> for Error {
    fn from(value: InvalidEmail) -> Self {
        let fields = validator::ValidateError::message("email", "Invalid email format");
        Error::from_context(ErrorType::InvalidFormBody(fields), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use thiserror::Error as ThisError;

    #[derive(Debug, ThisError)]
    #[error("boom")]
    struct Boom;

    fn error_of(error_type: ErrorType) -> Error {
        Error::from_context(error_type, Boom)
    }

    #[test]
    fn taxonomy_maps_to_status_codes() {
        assert_eq!(error_of(ErrorType::AccountExists).status_code(), StatusCode::CONFLICT);
        assert_eq!(
            error_of(ErrorType::Internal).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error_of(ErrorType::NotFound).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            error_of(ErrorType::SessionRejected).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            error_of(ErrorType::Unauthorized).status_code(),
            StatusCode::UNAUTHORIZED
        );

        let invalid = Error::from(InvalidEmail);
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_email_carries_the_wire_message() {
        let error = Error::from(InvalidEmail);
        let ErrorType::InvalidFormBody(fields) = error.as_type() else {
            panic!("expected InvalidFormBody, got {:?}", error.as_type());
        };

        assert_eq!(
            serde_json::to_value(fields).unwrap(),
            serde_json::json!({ "email": { "_errors": ["Invalid email format"] } })
        );
    }
}
