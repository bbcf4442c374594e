use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::email_client::EmailClient;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub contact: ContactSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl EmailClientSettings {
    pub fn client(self) -> Result<EmailClient, anyhow::Error> {
        let timeout = self.timeout();
        EmailClient::new(self.base_url, timeout)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Delivery settings for the contact form.
///
/// Credentials may be absent. The contact pipeline reports the missing
/// settings on every submission instead of refusing to start.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct ContactSettings {
    pub brand: String,
    #[serde(default)]
    pub sender_email: Option<String>,
    #[serde(default)]
    pub sender_secret: Option<SecretString>,
    #[serde(default)]
    pub recipient_email: Option<String>,
}

/// Resolved delivery target for a single submission.
#[derive(Debug, Clone)]
pub struct DeliveryTarget {
    pub account: SenderAccount,
    pub recipient: String,
}

#[derive(Debug, Clone)]
pub struct SenderAccount {
    pub email: String,
    pub secret: SecretString,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error(
    "Email is not configured. Please set {}, and optionally contact.recipient_email.",
    .0.join(", ")
)]
pub struct MissingSettings(pub Vec<&'static str>);

impl ContactSettings {
    pub fn delivery_target(&self) -> Result<DeliveryTarget, MissingSettings> {
        let sender = self
            .sender_email
            .as_deref()
            .filter(|s| !s.trim().is_empty());
        let secret = self
            .sender_secret
            .as_ref()
            .filter(|s| !s.expose_secret().trim().is_empty());

        let (Some(sender), Some(secret)) = (sender, secret) else {
            let mut missing = Vec::new();
            if sender.is_none() {
                missing.push("contact.sender_email");
            }
            if secret.is_none() {
                missing.push("contact.sender_secret");
            }
            return Err(MissingSettings(missing));
        };

        let recipient = self
            .recipient_email
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(sender);

        Ok(DeliveryTarget {
            account: SenderAccount {
                email: sender.to_owned(),
                secret: secret.clone(),
            },
            recipient: recipient.to_owned(),
        })
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, anyhow::Error> {
    let base_path = std::env::current_dir()?;
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = config::Config::builder()
        .add_source(config::File::from(conf_dir.join("base.yaml")).required(true))
        .add_source(
            config::File::from(conf_dir.join(format!("{}.yaml", env.as_str()))).required(true),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}
