use crate::domain::NotificationEmail;
use crate::forms::NotificationForm;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounsellingInquiry {
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub country_code: Option<String>,
    pub phone: Option<String>,
    pub study_destination: Option<String>,
    pub level: Option<String>,
    pub proficiency_test: Option<String>,
}

impl NotificationForm for CounsellingInquiry {
    fn required_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("fullName", self.full_name.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
            ("studyDestination", self.study_destination.as_deref()),
        ]
    }

    fn render(&self) -> NotificationEmail {
        let full_name = self.full_name.as_deref().unwrap_or_default();
        let email = self.email.as_deref().unwrap_or_default();
        let address = self.address.as_deref().unwrap_or_default();
        let country_code = self.country_code.as_deref().unwrap_or_default();
        let phone = self.phone.as_deref().unwrap_or_default();
        let study_destination = self.study_destination.as_deref().unwrap_or_default();
        let level = self.level.as_deref().unwrap_or_default();
        let proficiency_test = self.proficiency_test.as_deref().unwrap_or_default();

        NotificationEmail {
            reply_to: email.to_owned(),
            subject: format!("Free Counselling Inquiry from {full_name}"),
            html_body: format!(
                "<h2>New Free Counselling Inquiry</h2>\
                <p>Details:</p>\
                <ul>\
                <li><strong>Full Name:</strong> {full_name}</li>\
                <li><strong>Email:</strong> {email}</li>\
                <li><strong>Address:</strong> {address}</li>\
                <li><strong>Phone:</strong> {country_code} {phone}</li>\
                <li><strong>Destination:</strong> {study_destination}</li>\
                <li><strong>Level:</strong> {level}</li>\
                <li><strong>Test:</strong> {proficiency_test}</li>\
                </ul>"
            ),
        }
    }
}
