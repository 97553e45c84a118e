use crate::helpers::spawn_server;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_a_complete_inquiry_then_it_should_dispatch_one_email_and_return_200() {
    let test_app = spawn_server().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let body = "fullName=Jane%20Doe&email=jane%40x.com&phone=5551234&studyDestination=Canada";
    let response = test_app.post_form("/submit-form", body).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        "Thank you! Your inquiry has been sent successfully."
    );

    let dispatched = test_app.dispatched_email_bodies().await;
    assert_eq!(dispatched.len(), 1);
    assert_eq!(
        dispatched[0]["Subject"],
        "Free Counselling Inquiry from Jane Doe"
    );
    assert_eq!(dispatched[0]["ReplyTo"], "jane@x.com");
}

#[tokio::test]
async fn given_a_json_body_then_it_should_be_accepted_as_well() {
    let test_app = spawn_server().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let body = serde_json::json!({
        "fullName": "Jane Doe",
        "email": "jane@x.com",
        "phone": "5551234",
        "studyDestination": "Canada",
    });
    let response = test_app.post_json("/submit-form", body).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn given_missing_required_fields_then_it_should_return_400_without_dispatching() {
    let test_app = spawn_server().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.email_server)
        .await;

    let test_cases = vec![
        (
            "email=jane%40x.com&phone=5551234&studyDestination=Canada",
            "missing the full name",
        ),
        (
            "fullName=Jane%20Doe&phone=5551234&studyDestination=Canada",
            "missing the email",
        ),
        (
            "fullName=Jane%20Doe&email=jane%40x.com&studyDestination=Canada",
            "missing the phone",
        ),
        (
            "fullName=Jane%20Doe&email=jane%40x.com&phone=5551234",
            "missing the study destination",
        ),
        (
            "fullName=&email=jane%40x.com&phone=5551234&studyDestination=Canada",
            "empty full name",
        ),
        ("", "missing every field"),
    ];

    for (body, error_message) in test_cases {
        let response = test_app.post_form("/submit-form", body).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
        assert_eq!(response.text().await.unwrap(), "Missing required fields.");
    }
}

#[tokio::test]
async fn given_absent_optional_fields_then_it_should_still_dispatch() {
    let test_app = spawn_server().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let body = "fullName=Jane%20Doe&email=jane%40x.com&phone=5551234&studyDestination=Canada\
        &address=&countryCode=&level=&proficiencyTest=";
    let response = test_app.post_form("/submit-form", body).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn given_the_same_inquiry_twice_then_it_should_dispatch_twice() {
    let test_app = spawn_server().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&test_app.email_server)
        .await;

    let body = "fullName=Jane%20Doe&email=jane%40x.com&phone=5551234&studyDestination=Canada";

    let first_response = test_app.post_form("/submit-form", body).await;
    let second_response = test_app.post_form("/submit-form", body).await;

    assert_eq!(first_response.status().as_u16(), 200);
    assert_eq!(second_response.status().as_u16(), 200);
}

#[tokio::test]
async fn given_the_relay_rejects_the_email_then_it_should_return_500_with_a_generic_body() {
    let test_app = spawn_server().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let body = "fullName=Jane%20Doe&email=jane%40x.com&phone=5551234&studyDestination=Canada";
    let response = test_app.post_form("/submit-form", body).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(
        response.text().await.unwrap(),
        "An error occurred while sending your message. Please try again."
    );
}
