use crate::email_client::EmailClient;
use crate::forms::ContactMessage;
use crate::routes::{handle_submission, ResponseMessages};
use actix_web::{web, Either, HttpResponse};

const RESPONSES: ResponseMessages = ResponseMessages {
    success: "Message sent successfully! Thank you for reaching out.",
    missing_fields: "Please fill out all required fields.",
    dispatch_failed: "An error occurred while sending your message.",
};

#[tracing::instrument(name = "send_contact_email", skip(request_body, email_client))]
pub async fn send_contact_email(
    request_body: Either<web::Form<ContactMessage>, web::Json<ContactMessage>>,
    email_client: web::Data<EmailClient>,
) -> HttpResponse {
    handle_submission(request_body.into_inner(), email_client.get_ref(), &RESPONSES).await
}
