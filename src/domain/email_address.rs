use validator::ValidateEmail;

/// Email address
#[derive(Debug)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse email address
    pub fn parse(email: String) -> Result<Self, String> {
        let email = email.trim();
        if email.validate_email() {
            Ok(Self(email.to_string()))
        } else {
            Err(format!("`{email}` is not a valid email address"))
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
