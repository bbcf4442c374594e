mod contact_email;
mod contact_name;
mod field_errors;
mod inquiry_message;
mod new_inquiry;
mod plan_name;
mod submission;

pub use contact_email::ContactEmail;
pub use contact_name::ContactName;
pub use field_errors::FieldErrors;
pub use inquiry_message::InquiryMessage;
pub use new_inquiry::NewInquiry;
pub use plan_name::PlanName;
pub use submission::{RawSubmission, SubmissionResult};

/// Length in UTF-16 code units, the unit the website's form limits use.
fn char_count(s: &str) -> usize {
    s.encode_utf16().count()
}

fn at_most(max: usize) -> String {
    format!("String must contain at most {max} character(s)")
}
