use crate::email_client::EmailClient;
use crate::forms::CounsellingInquiry;
use crate::routes::{handle_submission, ResponseMessages};
use actix_web::{web, Either, HttpResponse};

const RESPONSES: ResponseMessages = ResponseMessages {
    success: "Thank you! Your inquiry has been sent successfully.",
    missing_fields: "Missing required fields.",
    dispatch_failed: "An error occurred while sending your message. Please try again.",
};

#[tracing::instrument(name = "submit_counselling_inquiry", skip(request_body, email_client))]
pub async fn submit_counselling_inquiry(
    request_body: Either<web::Form<CounsellingInquiry>, web::Json<CounsellingInquiry>>,
    email_client: web::Data<EmailClient>,
) -> HttpResponse {
    handle_submission(request_body.into_inner(), email_client.get_ref(), &RESPONSES).await
}
