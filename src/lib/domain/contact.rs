//! Contact form submissions: validation, composition and dispatch.

mod email;
mod form;
mod service;

pub mod errors;

pub use email::{compose, escape_html, ContactConfig, HtmlEscaping};
pub use errors::ContactError;
pub use form::{ContactForm, ContactRequest};
pub use service::{ContactService, ContactServiceImpl};
