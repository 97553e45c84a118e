pub mod booking;
pub mod contact;
pub mod counselling;
pub mod health_check;

use crate::email_client::EmailClient;
use crate::forms::{validate_required, NotificationForm};
use actix_web::HttpResponse;

pub struct ResponseMessages {
    pub success: &'static str,
    pub missing_fields: &'static str,
    pub dispatch_failed: &'static str,
}

/// Shared pipeline for every submission endpoint: validate, render,
/// dispatch, map the outcome to a response.
pub async fn handle_submission<F: NotificationForm>(
    form: F,
    email_client: &EmailClient,
    messages: &ResponseMessages,
) -> HttpResponse {
    if let Err(error) = validate_required(&form.required_fields()) {
        tracing::warn!(
            missing_fields = ?error.0,
            "Rejecting a submission with missing required fields"
        );
        return HttpResponse::BadRequest().body(messages.missing_fields);
    }

    let notification = form.render();

    match email_client.send_notification(&notification).await {
        Ok(()) => HttpResponse::Ok().body(messages.success),
        Err(error) => {
            tracing::error!(
                error.cause_chain = ?error,
                "Failed to dispatch the notification email"
            );
            HttpResponse::InternalServerError().body(messages.dispatch_failed)
        }
    }
}
