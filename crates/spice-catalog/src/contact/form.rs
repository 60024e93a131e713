//! Contact form input and validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\d\s\-+()]{10,}$").expect("phone pattern is valid")
});

/// Answer to the "5 + 3" captcha.
const CAPTCHA_ANSWER: i64 = 8;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

/// Kind of inquiry selectable on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    General,
    Bulk,
    Custom,
    Partnership,
    Support,
    Feedback,
}

impl InquiryType {
    pub const ALL: [InquiryType; 6] = [
        InquiryType::General,
        InquiryType::Bulk,
        InquiryType::Custom,
        InquiryType::Partnership,
        InquiryType::Support,
        InquiryType::Feedback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Bulk => "bulk",
            InquiryType::Custom => "custom",
            InquiryType::Partnership => "partnership",
            InquiryType::Support => "support",
            InquiryType::Feedback => "feedback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Bulk => "Bulk Orders",
            InquiryType::Custom => "Custom Blending",
            InquiryType::Partnership => "Business Partnership",
            InquiryType::Support => "Customer Support",
            InquiryType::Feedback => "Feedback & Suggestions",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Validation failures, in the order the checks run.
///
/// The display text is what the visitor sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter a valid name (at least 2 characters).")]
    InvalidName,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number (at least 10 digits).")]
    InvalidPhone,

    #[error("Please select an inquiry type.")]
    MissingInquiryType,

    #[error("Please select a valid inquiry type ({0} is not offered).")]
    UnknownInquiryType(String),

    #[error("Please enter a message (at least 10 characters).")]
    MessageTooShort,

    #[error("Please solve the captcha correctly (5 + 3 = 8).")]
    WrongCaptcha,
}

/// Raw form fields as submitted. Nothing here is trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub inquiry_type: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub captcha: String,
}

/// A submission that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    /// Phone number with whitespace removed.
    pub phone: String,
    pub inquiry_type: InquiryType,
    pub message: String,
}

impl ContactForm {
    /// Run the checks in order; the first failure is returned.
    pub fn validate(&self) -> Result<ContactRequest, ContactError> {
        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_CHARS {
            return Err(ContactError::InvalidName);
        }

        let email = self.email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }

        let phone: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        if !PHONE_RE.is_match(&phone) {
            return Err(ContactError::InvalidPhone);
        }

        let inquiry_type = match self.inquiry_type.as_deref().map(str::trim) {
            None | Some("") => return Err(ContactError::MissingInquiryType),
            Some(raw) => InquiryType::from_str(raw)
                .ok_or_else(|| ContactError::UnknownInquiryType(raw.to_string()))?,
        };

        let message = self.message.trim();
        if message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ContactError::MessageTooShort);
        }

        if self.captcha.trim().parse::<i64>().ok() != Some(CAPTCHA_ANSWER) {
            return Err(ContactError::WrongCaptcha);
        }

        Ok(ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone,
            inquiry_type,
            message: message.to_string(),
        })
    }
}
