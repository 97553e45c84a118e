use crate::domain::NotificationEmail;
use crate::forms::NotificationForm;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub full_name: Option<String>,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub selected_date: Option<String>,
    pub selected_time: Option<String>,
    pub study_destination: Option<String>,
    pub timezone: Option<String>,
}

impl NotificationForm for BookingRequest {
    fn required_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("fullName", self.full_name.as_deref()),
            ("emailAddress", self.email_address.as_deref()),
            ("phoneNumber", self.phone_number.as_deref()),
            ("selectedDate", self.selected_date.as_deref()),
            ("selectedTime", self.selected_time.as_deref()),
        ]
    }

    fn render(&self) -> NotificationEmail {
        let full_name = self.full_name.as_deref().unwrap_or_default();
        let email_address = self.email_address.as_deref().unwrap_or_default();
        let phone_number = self.phone_number.as_deref().unwrap_or_default();
        let selected_date = self.selected_date.as_deref().unwrap_or_default();
        let selected_time = self.selected_time.as_deref().unwrap_or_default();
        let study_destination = self.study_destination.as_deref().unwrap_or_default();
        let timezone = self.timezone.as_deref().unwrap_or_default();

        NotificationEmail {
            reply_to: email_address.to_owned(),
            subject: format!("New Booking Request from {full_name}"),
            html_body: format!(
                "<h2>New Counselling Booking Request</h2>\
                <p>Details:</p>\
                <ul>\
                <li><strong>Full Name:</strong> {full_name}</li>\
                <li><strong>Email:</strong> {email_address}</li>\
                <li><strong>Phone:</strong> {phone_number}</li>\
                <li><strong>Date:</strong> {selected_date}</li>\
                <li><strong>Time:</strong> {selected_time} {timezone}</li>\
                <li><strong>Destination:</strong> {study_destination}</li>\
                </ul>"
            ),
        }
    }
}
