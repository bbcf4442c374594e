use validator::ValidateEmail;

use super::{at_most, char_count};

const MAX_LENGTH: usize = 200;

/// The submitter's address. Used as the reply-to of the notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        if !s.validate_email() {
            return Err("A valid email is required".into());
        }
        if char_count(&s) > MAX_LENGTH {
            return Err(at_most(MAX_LENGTH));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        ContactEmail::parse(value)
    }
}
