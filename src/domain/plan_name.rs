use super::{at_most, char_count};

const MAX_LENGTH: usize = 100;

/// Pricing plan the visitor picked on the site, e.g. `Professional`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanName(String);

impl PlanName {
    /// An empty value means "General Inquiry" and yields `None`.
    pub fn parse_optional(s: Option<String>) -> Result<Option<Self>, String> {
        match s {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) if char_count(&s) > MAX_LENGTH => Err(at_most(MAX_LENGTH)),
            Some(s) => Ok(Some(Self(s))),
        }
    }
}

impl AsRef<str> for PlanName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlanName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
