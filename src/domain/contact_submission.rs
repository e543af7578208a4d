use crate::domain::{ContactName, EmailAddress, MessageContent};

/// Validated contact form submission
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub message: MessageContent,
}

impl ContactSubmission {
    /// Normalize an optional phone number, blank values are treated as not provided
    pub fn parse_phone(phone: Option<String>) -> Option<String> {
        phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
    }
}
