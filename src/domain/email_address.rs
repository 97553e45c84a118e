use validator::ValidateEmail;

#[derive(Debug, Clone)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(value: String) -> Result<EmailAddress, String> {
        if ValidateEmail::validate_email(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "The value provided is not a valid email address. value = {}",
                value
            ))
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
