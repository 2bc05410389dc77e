use gloo::net::http::Request;
use serde::Serialize;

use crate::config::{MailerConfig, EMAILJS_ENDPOINT};
use crate::error::{ConfigError, SendError};
use crate::types::ContactFields;

/// Delivers a contact message somewhere outside the browser.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send(&self, fields: &ContactFields) -> Result<(), SendError>;
}

#[derive(Serialize, Debug, PartialEq)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub message: &'a str,
}

/// Body of an EmailJS `email/send` call.
#[derive(Serialize, Debug, PartialEq)]
pub struct EmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

pub struct EmailJs {
    endpoint: String,
    config: Result<MailerConfig, ConfigError>,
}

impl EmailJs {
    pub fn new(config: MailerConfig) -> Self {
        Self::with_config(Ok(config))
    }

    /// Keeps a configuration error around so every send reports it.
    pub fn with_config(config: Result<MailerConfig, ConfigError>) -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::with_config(MailerConfig::from_env())
    }

    pub fn config_error(&self) -> Option<&ConfigError> {
        self.config.as_ref().err()
    }

    pub fn request<'a>(&'a self, fields: &'a ContactFields) -> Result<EmailRequest<'a>, SendError> {
        let config = self.config.as_ref().map_err(|e| SendError::from(e.clone()))?;
        Ok(EmailRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                from_name: fields.name.trim(),
                from_email: fields.email.trim(),
                message: &fields.message,
            },
        })
    }
}

impl Mailer for EmailJs {
    async fn send(&self, fields: &ContactFields) -> Result<(), SendError> {
        let body = self.request(fields)?;
        let response = Request::post(&self.endpoint)
            .json(&body)
            .map_err(|e| SendError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SendError::Rejected {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}
