//! Contact form payloads

use serde_json::{Map, Value};

use super::errors::ContactError;

/// An unvalidated contact form, as submitted by the browser
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    fields: Map<String, Value>,
}

/// A contact form whose required fields are all present
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    /// The submitter's name
    pub name: String,

    /// The submitter's email address, as typed
    pub email: String,

    /// The subject of the query
    pub subject: String,

    /// The message body
    pub message: String,
}

impl ContactForm {
    /// Checks that `name`, `email`, `subject` and `message` all hold a value.
    ///
    /// # Returns
    /// A [`ContactRequest`] with the values passed through verbatim, or
    /// [`ContactError::MissingFields`] without saying which field was at fault.
    pub fn validate(&self) -> Result<ContactRequest, ContactError> {
        let field = |key: &str| {
            self.fields
                .get(key)
                .and_then(truthy_text)
                .ok_or(ContactError::MissingFields)
        };

        Ok(ContactRequest {
            name: field("name")?,
            email: field("email")?,
            subject: field("subject")?,
            message: field("message")?,
        })
    }
}

impl From<Map<String, Value>> for ContactForm {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Text of a scalar that a browser form would treat as filled in.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
