mod contact_name;
mod contact_submission;
mod email_address;
mod message_content;
mod notification;

pub use contact_name::ContactName;
pub use contact_submission::ContactSubmission;
pub use email_address::EmailAddress;
pub use message_content::{MessageContent, MessageError};
pub use notification::Notification;
