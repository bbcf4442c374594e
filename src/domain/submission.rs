use super::FieldErrors;

const THANK_YOU: &str = "Thanks! Your message has been sent. We’ll get back to you shortly.";
const FIX_ERRORS: &str = "Please fix the highlighted errors.";
const TRY_AGAIN_LATER: &str = "Something went wrong. Please try again later.";

/// Contact form fields as posted by the website. Absent fields are `None`.
#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmission {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub plan: Option<String>,
    pub hp: Option<String>,
}

impl RawSubmission {
    /// Humans never see the honeypot input, so any content means a bot.
    pub fn is_spam(&self) -> bool {
        self.hp.as_deref().is_some_and(|hp| !hp.trim().is_empty())
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl SubmissionResult {
    pub fn delivered() -> Self {
        Self {
            ok: true,
            message: THANK_YOU.into(),
            errors: None,
        }
    }

    pub fn rejected(errors: FieldErrors) -> Self {
        Self {
            ok: false,
            message: FIX_ERRORS.into(),
            errors: Some(errors),
        }
    }

    /// Generic failure that reveals nothing about the cause.
    pub fn unexpected() -> Self {
        Self::failed(TRY_AGAIN_LATER)
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            errors: None,
        }
    }
}
