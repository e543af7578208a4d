use crate::domain::ContactSubmission;

/// Placeholder shown in the channel when no phone number was submitted
const NO_PHONE: &str = "Not provided";

/// Incoming webhook payload, rendered by Slack as mrkdwn
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct Notification {
    pub text: String,
}

/// Escape the characters Slack treats as control sequences in `text`
/// <https://api.slack.com/reference/surfaces/formatting#escaping>
fn escape_mrkdwn(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Escape a field rendered on a single line, control characters become spaces
fn escape_line(value: &str) -> String {
    let line: String = value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    escape_mrkdwn(&line)
}

impl From<&ContactSubmission> for Notification {
    fn from(submission: &ContactSubmission) -> Self {
        let text = format!(
            "*New contact form submission*\n\
            *Name:* {}\n\
            *Email:* {}\n\
            *Phone:* {}\n\
            *Message:*\n{}",
            escape_line(submission.name.as_ref()),
            escape_line(submission.email.as_ref()),
            escape_line(submission.phone.as_deref().unwrap_or(NO_PHONE)),
            escape_mrkdwn(submission.message.as_ref()),
        );
        Self { text }
    }
}
