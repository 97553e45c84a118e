/// `reply_to` carries the submitter's address so that staff replies go back
/// to the originator; the fixed sender and recipient live on the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEmail {
    pub reply_to: String,
    pub subject: String,
    pub html_body: String,
}
