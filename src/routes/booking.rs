use crate::email_client::EmailClient;
use crate::forms::BookingRequest;
use crate::routes::{handle_submission, ResponseMessages};
use actix_web::{web, Either, HttpResponse};

const RESPONSES: ResponseMessages = ResponseMessages {
    success: "Booking successful! We will be in touch shortly.",
    missing_fields: "Missing required fields from booking form.",
    dispatch_failed: "An error occurred while confirming your booking.",
};

#[tracing::instrument(name = "book_counselling", skip(request_body, email_client))]
pub async fn book_counselling(
    request_body: Either<web::Form<BookingRequest>, web::Json<BookingRequest>>,
    email_client: web::Data<EmailClient>,
) -> HttpResponse {
    handle_submission(request_body.into_inner(), email_client.get_ref(), &RESPONSES).await
}
