use crate::error::ConfigError;

/// Scroll offset past which the navigation bar switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 150.0;
/// Distance from the viewport top of the line a section must straddle to be active.
pub const ACTIVE_SECTION_LINE_PX: f64 = 100.0;
/// Delay before a closed gallery forgets its category, matching the exit animation.
pub const MODAL_EXIT_MS: u32 = 300;
pub const TOAST_DURATION_MS: u32 = 5_000;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SERVICE_ID_KEY: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_KEY: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_KEY: &str = "EMAILJS_PUBLIC_KEY";

/// Deployment identifiers for the email-delivery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl MailerConfig {
    /// Reads the identifiers baked in at build time.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    /// Blank values count as missing.
    pub fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            service_id: required(SERVICE_ID_KEY, service_id)?,
            template_id: required(TEMPLATE_ID_KEY, template_id)?,
            public_key: required(PUBLIC_KEY_KEY, public_key)?,
        })
    }
}

fn required(key: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ConfigError::Missing(key)),
    }
}
