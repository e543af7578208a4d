/// Message parse error
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("The message is missing")]
    Missing,
    #[error("The message is {0} characters long, at least {min} are required", min = MessageContent::MIN_LENGTH)]
    TooShort(usize),
}

/// Body of a contact form message
#[derive(Debug)]
pub struct MessageContent(String);

impl MessageContent {
    /// Minimum number of characters (after trimming) a message must have
    pub const MIN_LENGTH: usize = 5;

    /// Parse message content
    pub fn parse(message: String) -> Result<Self, MessageError> {
        let message = message.trim();
        let length = message.chars().count();

        if length == 0 {
            Err(MessageError::Missing)
        } else if length < Self::MIN_LENGTH {
            Err(MessageError::TooShort(length))
        } else {
            Ok(Self(message.to_string()))
        }
    }
}

impl AsRef<str> for MessageContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
