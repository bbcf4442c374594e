use super::{at_most, char_count};

const MIN_LENGTH: usize = 10;
const MAX_LENGTH: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryMessage(String);

impl InquiryMessage {
    pub fn parse(s: String) -> Result<Self, String> {
        let length = char_count(&s);
        if length < MIN_LENGTH {
            return Err(format!("Please provide at least {MIN_LENGTH} characters"));
        }
        if length > MAX_LENGTH {
            return Err(at_most(MAX_LENGTH));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for InquiryMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
