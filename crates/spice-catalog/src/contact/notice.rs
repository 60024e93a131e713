//! Toast notification payloads.

use serde::Serialize;

use crate::contact::ContactError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A message for the notification area. Only one is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Confirmation after a successful submission.
    pub fn submitted() -> Self {
        Self::new(
            NoticeKind::Success,
            "Thank you for your message! We will get back to you soon.",
        )
    }
}

impl From<&ContactError> for Notice {
    fn from(err: &ContactError) -> Self {
        Self::new(NoticeKind::Error, err.to_string())
    }
}
