//! Contact module.
//!
//! Typed contact-form input, validated before anything else sees it.

mod form;
mod notice;

pub use form::{ContactError, ContactForm, ContactRequest, InquiryType};
pub use notice::{Notice, NoticeKind};
