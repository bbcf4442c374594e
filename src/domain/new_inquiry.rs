use super::{ContactEmail, ContactName, FieldErrors, InquiryMessage, PlanName, RawSubmission};

#[derive(Debug)]
pub struct NewInquiry {
    pub first_name: ContactName,
    pub last_name: ContactName,
    pub email: ContactEmail,
    pub message: InquiryMessage,
    pub plan: Option<PlanName>,
}

fn check<T>(
    errors: &mut FieldErrors,
    field: &str,
    outcome: Result<T, String>,
) -> Option<T> {
    outcome.map_err(|message| errors.insert(field, message)).ok()
}

impl TryFrom<RawSubmission> for NewInquiry {
    type Error = FieldErrors;

    fn try_from(raw: RawSubmission) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::new();

        let first_name = check(
            &mut errors,
            "firstName",
            ContactName::parse_first(raw.first_name.unwrap_or_default()),
        );
        let last_name = check(
            &mut errors,
            "lastName",
            ContactName::parse_last(raw.last_name.unwrap_or_default()),
        );
        let email = check(
            &mut errors,
            "email",
            ContactEmail::parse(raw.email.unwrap_or_default()),
        );
        let message = check(
            &mut errors,
            "message",
            InquiryMessage::parse(raw.message.unwrap_or_default()),
        );
        let plan = check(&mut errors, "plan", PlanName::parse_optional(raw.plan));

        match (first_name, last_name, email, message, plan) {
            (Some(first_name), Some(last_name), Some(email), Some(message), Some(plan)) => {
                Ok(Self {
                    first_name,
                    last_name,
                    email,
                    message,
                    plan,
                })
            }
            _ => Err(errors),
        }
    }
}
