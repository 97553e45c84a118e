use crate::domain::{EmailAddress, NotificationEmail};
use crate::utils::error_chain_fmt;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;
use std::time::Duration;

#[derive(thiserror::Error)]
#[error("Failed to deliver the notification email")]
pub struct DispatchError(#[from] pub reqwest::Error);

impl Debug for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender_name: String,
    sender: EmailAddress,
    recipient: EmailAddress,
    authorization_token: SecretString,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender_name: String,
        sender: EmailAddress,
        recipient: EmailAddress,
        authorization_token: SecretString,
        timeout: Duration,
    ) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();

        Self {
            http_client,
            base_url,
            sender_name,
            sender,
            recipient,
            authorization_token,
        }
    }

    /// One delivery attempt per call, no retry.
    pub async fn send_notification(
        &self,
        notification: &NotificationEmail,
    ) -> Result<(), DispatchError> {
        let url = format!("{}/email", self.base_url);
        let from = format!("{} <{}>", self.sender_name, self.sender.as_ref());
        let request_body = SendEmailRequestBody {
            from: &from,
            to: self.recipient.as_ref(),
            reply_to: &notification.reply_to,
            subject: &notification.subject,
            html_body: &notification.html_body,
        };

        self.http_client
            .post(url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequestBody<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    html_body: &'a str,
}
