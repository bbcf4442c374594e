use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::{
    configuration::SenderAccount,
    delivery::{DeliveryGateway, DeliveryMessage, Mailbox},
};

/// HTTP client for the mail relay's `v1/email` endpoint.
#[derive(Debug, Clone)]
pub struct EmailClient {
    http_client: Client,
    endpoint: Url,
}

#[derive(Serialize)]
struct EmailUnit<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl<'a> From<&'a Mailbox> for EmailUnit<'a> {
    fn from(mailbox: &'a Mailbox) -> Self {
        Self {
            email: &mailbox.email,
            name: mailbox.name.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: EmailUnit<'a>,
    to: Vec<EmailUnit<'a>>,
    reply_to: EmailUnit<'a>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

/// Appends `v1/email` to the relay url, keeping any path prefix.
fn endpoint(base_url: &str) -> Result<Url, anyhow::Error> {
    let mut base = Url::parse(base_url)
        .with_context(|| format!("Failed parsing mail relay url `{base_url}`."))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join("v1/email")?)
}

impl EmailClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, anyhow::Error> {
        Ok(Self {
            http_client: Client::builder()
                .timeout(timeout)
                .build()
                .context("Failed to build the mail relay HTTP client.")?,
            endpoint: endpoint(&base_url)?,
        })
    }

    pub async fn send_email(
        &self,
        account: &SenderAccount,
        message: &DeliveryMessage,
    ) -> Result<(), reqwest::Error> {
        let body = SendEmailRequest {
            from: (&message.from).into(),
            to: vec![(&message.to).into()],
            reply_to: (&message.reply_to).into(),
            subject: &message.subject,
            html: &message.html,
            text: &message.text,
        };

        self.http_client
            .post(self.endpoint.clone())
            .bearer_auth(account.secret.expose_secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

impl DeliveryGateway for EmailClient {
    #[tracing::instrument(name = "Sending an email through the mail relay", skip_all)]
    async fn send(
        &self,
        account: &SenderAccount,
        message: &DeliveryMessage,
    ) -> Result<(), anyhow::Error> {
        self.send_email(account, message)
            .await
            .with_context(|| format!("Failed to send an email through {}.", self.endpoint))
    }
}
