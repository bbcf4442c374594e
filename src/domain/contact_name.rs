use super::{at_most, char_count};

const MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse_first(s: String) -> Result<Self, String> {
        Self::parse(s, "First name is required")
    }

    pub fn parse_last(s: String) -> Result<Self, String> {
        Self::parse(s, "Last name is required")
    }

    fn parse(s: String, required: &str) -> Result<Self, String> {
        let length = char_count(&s);
        if length == 0 {
            return Err(required.to_owned());
        }
        if length > MAX_LENGTH {
            return Err(at_most(MAX_LENGTH));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
