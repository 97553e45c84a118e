use crate::domain::NotificationEmail;
use crate::forms::NotificationForm;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl NotificationForm for ContactMessage {
    fn required_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("firstName", self.first_name.as_deref()),
            ("lastName", self.last_name.as_deref()),
            ("email", self.email.as_deref()),
            ("subject", self.subject.as_deref()),
            ("message", self.message.as_deref()),
        ]
    }

    fn render(&self) -> NotificationEmail {
        let first_name = self.first_name.as_deref().unwrap_or_default();
        let last_name = self.last_name.as_deref().unwrap_or_default();
        let email = self.email.as_deref().unwrap_or_default();
        let subject = self.subject.as_deref().unwrap_or_default();
        let message = self.message.as_deref().unwrap_or_default();

        NotificationEmail {
            reply_to: email.to_owned(),
            subject: format!("Contact Form Message: {subject}"),
            html_body: format!(
                "<h2>New Contact Form Submission</h2>\
                <p>From: <strong>{first_name} {last_name}</strong></p>\
                <p>Email: <strong>{email}</strong></p>\
                <hr>\
                <h3>Message:</h3>\
                <p style=\"white-space: pre-wrap;\">{message}</p>"
            ),
        }
    }
}
