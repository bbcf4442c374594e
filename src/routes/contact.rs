use actix_web::{HttpRequest, HttpResponse, error::UrlencodedError, web};

use crate::{
    contact::ContactPipeline,
    domain::{FieldErrors, RawSubmission, SubmissionResult},
    email_client::EmailClient,
};

/// Largest accepted form body. Every field at its length limit in
/// three-byte characters, percent-encoded, stays below this.
pub const FORM_LIMIT: usize = 64 * 1024;

const UNREADABLE_FORM: &str = "The form could not be read. Please try again.";

fn respond(result: &SubmissionResult) -> HttpResponse {
    let mut response = if result.ok {
        HttpResponse::Ok()
    } else if result.errors.is_some() {
        HttpResponse::BadRequest()
    } else {
        HttpResponse::InternalServerError()
    };
    response.json(result)
}

#[tracing::instrument(name = "Submitting the contact form", skip(form, pipeline))]
pub async fn submit_contact(
    form: web::Form<RawSubmission>,
    pipeline: web::Data<ContactPipeline<EmailClient>>,
) -> HttpResponse {
    let result = pipeline.submit(form.into_inner()).await;
    respond(&result)
}

/// Turns an undecodable form body into a regular rejected submission.
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(error.message = %err, "Failed to decode the contact form");
    let result = SubmissionResult::rejected(FieldErrors::form(UNREADABLE_FORM));
    actix_web::error::InternalError::from_response(err, respond(&result)).into()
}
