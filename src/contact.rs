use anyhow::Context;

use crate::{
    configuration::{ContactSettings, MissingSettings},
    delivery::{DeliveryGateway, DeliveryMessage},
    domain::{FieldErrors, NewInquiry, RawSubmission, SubmissionResult},
    routes::error_chain_fmt,
};

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("The submission has invalid fields.")]
    ValidationError(FieldErrors),
    #[error(transparent)]
    ConfigurationError(#[from] MissingSettings),
    #[error(transparent)]
    DeliveryError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<SubmitError> for SubmissionResult {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::ValidationError(errors) => SubmissionResult::rejected(errors),
            SubmitError::ConfigurationError(missing) => {
                SubmissionResult::failed(missing.to_string())
            }
            SubmitError::DeliveryError(_) => SubmissionResult::unexpected(),
        }
    }
}

/// Validates contact form submissions and forwards them to the site owner.
pub struct ContactPipeline<G> {
    settings: ContactSettings,
    gateway: G,
}

impl<G: DeliveryGateway> ContactPipeline<G> {
    pub fn new(settings: ContactSettings, gateway: G) -> Self {
        Self { settings, gateway }
    }

    #[tracing::instrument(
        name = "Handling a contact submission",
        skip(self, raw),
        fields(inquiry_email = tracing::field::Empty, inquiry_plan = tracing::field::Empty)
    )]
    pub async fn submit(&self, raw: RawSubmission) -> SubmissionResult {
        if raw.is_spam() {
            tracing::warn!("The honeypot field was filled in. Dropping the submission.");
            return SubmissionResult::delivered();
        }

        match self.deliver(raw).await {
            Ok(()) => SubmissionResult::delivered(),
            Err(e) => {
                match &e {
                    SubmitError::ValidationError(errors) => {
                        tracing::info!(fields = ?errors.fields().collect::<Vec<_>>(), "{e}")
                    }
                    SubmitError::ConfigurationError(_) => tracing::error!("{e}"),
                    SubmitError::DeliveryError(_) => tracing::error!(
                        error.cause_chain = ?e,
                        error.message = %e,
                        "Failed to deliver a contact inquiry"
                    ),
                }
                e.into()
            }
        }
    }

    async fn deliver(&self, raw: RawSubmission) -> Result<(), SubmitError> {
        let inquiry = NewInquiry::try_from(raw).map_err(SubmitError::ValidationError)?;

        let span = tracing::Span::current();
        span.record("inquiry_email", tracing::field::display(inquiry.email.as_ref()));
        if let Some(plan) = &inquiry.plan {
            span.record("inquiry_plan", tracing::field::display(plan));
        }

        let target = self.settings.delivery_target()?;

        let message = DeliveryMessage::compose(&self.settings.brand, &target, &inquiry)
            .context("Failed to render the inquiry email.")?;

        self.gateway
            .send(&target.account, &message)
            .await
            .context("Failed to send the inquiry email.")?;

        Ok(())
    }
}
