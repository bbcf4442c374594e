mod contact;
mod health_check;
mod helpers;

pub use contact::{FORM_LIMIT, form_error_handler, submit_contact};
pub use health_check::health_check;
pub use helpers::error_chain_fmt;
