use crate::contact::{ContactDispatcher, ContactError, ContactFormData};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, HttpResponseBuilder, ResponseError};

pub const CONTACT_FAILURE_MESSAGE: &str =
    "Sorry, there was a problem sending your message. Please try again later.";
pub const INVALID_FORM_MESSAGE: &str = "Invalid form submission";

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: ErrorMessage<'a>,
}

#[derive(serde::Serialize)]
struct ErrorMessage<'a> {
    message: &'a str,
}

#[derive(serde::Serialize)]
struct SuccessBody {
    success: bool,
}

fn error_body(message: &str) -> ErrorBody<'_> {
    ErrorBody {
        error: ErrorMessage { message },
    }
}

// The form is posted cross-origin from the static site
fn with_cors(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    builder
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactError::NotificationDispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Dispatch details stay in the logs
        let message = match self {
            ContactError::Validation(error) => error.message,
            ContactError::NotificationDispatch(_) => CONTACT_FAILURE_MESSAGE,
        };
        with_cors(&mut HttpResponse::build(self.status_code())).json(error_body(message))
    }
}

/// Answer undecodable bodies with the same JSON error shape as validation.
pub fn contact_form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|error, _request| {
        tracing::warn!("Failed to decode contact form: {}", error);
        let response =
            with_cors(&mut HttpResponse::BadRequest()).json(error_body(INVALID_FORM_MESSAGE));
        actix_web::error::InternalError::from_response(error, response).into()
    })
}

#[tracing::instrument(
    name = "Handling contact submission",
    skip(form, dispatcher),
    fields(
        submitter_name = %form.name,
        submitter_email = %form.email
    )
)]
pub async fn contact(
    form: web::Form<ContactFormData>,
    dispatcher: web::Data<ContactDispatcher>,
) -> Result<HttpResponse, ContactError> {
    dispatcher.submit(form.into_inner()).await?;
    Ok(with_cors(&mut HttpResponse::Ok()).json(SuccessBody { success: true }))
}

pub async fn contact_preflight() -> HttpResponse {
    with_cors(&mut HttpResponse::NoContent()).finish()
}
