use std::future::Future;

use crate::{
    configuration::{DeliveryTarget, SenderAccount},
    domain::NewInquiry,
};

const INQUIRY_TEMPLATE: &str = include_str!("../views/contact_inquiry.html");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub email: String,
    pub name: Option<String>,
}

impl Mailbox {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// Notification sent to the site owner for one contact inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryMessage {
    pub from: Mailbox,
    pub to: Mailbox,
    pub reply_to: Mailbox,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl DeliveryMessage {
    pub fn compose(
        brand: &str,
        target: &DeliveryTarget,
        inquiry: &NewInquiry,
    ) -> Result<Self, tera::Error> {
        Ok(Self {
            from: Mailbox::named(&target.account.email, format!("{brand} Website")),
            to: Mailbox::new(&target.recipient),
            reply_to: Mailbox::new(inquiry.email.as_ref()),
            subject: subject(brand, inquiry),
            text: text_body(inquiry),
            html: html_body(brand, inquiry)?,
        })
    }
}

fn subject(brand: &str, inquiry: &NewInquiry) -> String {
    let plan = inquiry
        .plan
        .as_ref()
        .map(|plan| format!(" [{plan}]"))
        .unwrap_or_default();
    format!(
        "New {brand} inquiry{plan} from {} {}",
        inquiry.first_name, inquiry.last_name
    )
}

fn text_body(inquiry: &NewInquiry) -> String {
    let plan = inquiry
        .plan
        .as_ref()
        .map(|plan| format!("Plan: {plan}\n"))
        .unwrap_or_default();
    format!(
        "Name: {} {}\nEmail: {}\n{plan}\nMessage:\n{}",
        inquiry.first_name,
        inquiry.last_name,
        inquiry.email.as_ref(),
        inquiry.message.as_ref()
    )
}

fn html_body(brand: &str, inquiry: &NewInquiry) -> Result<String, tera::Error> {
    let mut ctx = tera::Context::new();
    ctx.insert("brand", brand);
    ctx.insert("first_name", inquiry.first_name.as_ref());
    ctx.insert("last_name", inquiry.last_name.as_ref());
    ctx.insert("email", inquiry.email.as_ref());
    ctx.insert("plan", &inquiry.plan.as_ref().map(AsRef::<str>::as_ref));
    ctx.insert("message", inquiry.message.as_ref());
    tera::Tera::one_off(INQUIRY_TEMPLATE, &ctx, true)
}

/// Something that can hand a [`DeliveryMessage`] to a mail relay.
pub trait DeliveryGateway: Send + Sync {
    fn send(
        &self,
        account: &SenderAccount,
        message: &DeliveryMessage,
    ) -> impl Future<Output = Result<(), anyhow::Error>> + Send;
}
