mod email_address;
mod notification;

pub use email_address::EmailAddress;
pub use notification::NotificationEmail;
