mod booking;
mod contact;
mod counselling;

pub use booking::BookingRequest;
pub use contact::ContactMessage;
pub use counselling::CounsellingInquiry;

use crate::domain::NotificationEmail;

/// One web form submission type: a required-field list for validation and a
/// fixed rendering into a notification email.
pub trait NotificationForm {
    fn required_fields(&self) -> Vec<(&'static str, Option<&str>)>;

    fn render(&self) -> NotificationEmail;
}

#[derive(thiserror::Error, Debug)]
#[error("Missing required fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);

/// A value counts as missing when the field is absent or the empty string.
pub fn validate_required(
    fields: &[(&'static str, Option<&str>)],
) -> Result<(), MissingFields> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.map_or(true, str::is_empty))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingFields(missing))
    }
}
