use std::fmt;

use actix_web::error::JsonPayloadError;
use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::domain::{
    ContactName, ContactSubmission, EmailAddress, MessageContent, MessageError, Notification,
};
use crate::utils::error_chain_fmt;
use crate::webhook_client::Notifier;

/// Contact form data, absent fields deserialize as empty
#[derive(Default, serde::Deserialize)]
#[serde(default)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ContactError;

    fn try_from(value: ContactForm) -> Result<Self, Self::Error> {
        let name = ContactName::parse(value.name).map_err(ContactError::ValidationError)?;
        let email = EmailAddress::parse(value.email).map_err(ContactError::ValidationError)?;
        let phone = Self::parse_phone(value.phone);
        let message = MessageContent::parse(value.message)?;
        Ok(Self {
            name,
            email,
            phone,
            message,
        })
    }
}

/// JSON body of a rejected submission
#[derive(serde::Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// JSON body of a processed submission
#[derive(serde::Serialize)]
struct MessageBody {
    message: &'static str,
}

/// Contact submission error
#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Missing or incorrect required property")]
    ValidationError(String),
    #[error("Message is too short for submission")]
    MessageTooShort(#[source] MessageError),
    #[error("Failed post to #contact channel")]
    UpstreamError(#[source] anyhow::Error),
}

impl From<MessageError> for ContactError {
    fn from(e: MessageError) -> Self {
        match e {
            MessageError::Missing => Self::ValidationError(e.to_string()),
            MessageError::TooShort(_) => Self::MessageTooShort(e),
        }
    }
}

impl fmt::Debug for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)?;
        if let Self::ValidationError(reason) = self {
            writeln!(f, "Caused by:\n\t{reason}")?;
        }
        Ok(())
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MessageTooShort(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            Self::ValidationError(_) => response.json(ErrorBody {
                error: "Missing or incorrect required property",
            }),
            Self::MessageTooShort(_) => response.json(ErrorBody {
                error: "Message is too short for submission",
            }),
            Self::UpstreamError(_) => response.json(MessageBody {
                message: "Failed post to #contact channel",
            }),
        }
    }
}

/// Turn a body that cannot be deserialized into a validation error
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ContactError::ValidationError(format!("Failed to parse the request body: {err}")).into()
}

/// JSON extractor configuration for the contact endpoint
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

/// Contact form handler
#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(form, notifier),
    fields(contact_email = %form.email)
)]
pub async fn contact<N: Notifier + Send + Sync + 'static>(
    form: web::Json<ContactForm>,
    notifier: web::Data<N>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission = form.into_inner().try_into()?;

    notifier
        .notify(&Notification::from(&submission))
        .await
        .map_err(ContactError::UpstreamError)?;

    Ok(HttpResponse::Ok().json(MessageBody { message: "SUCCESS" }))
}

/// Reject any method other than POST on the contact endpoint
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST"))
        .finish()
}
