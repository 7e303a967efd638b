use crate::censoredstring::CensoredString;
use serde_aux::field_attributes::{
    deserialize_number_from_string, deserialize_option_number_from_string,
};
use std::time::Duration;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email: EmailSettings,
    pub site: SiteSettings,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    // Serve the healthcheck on its own listener when present
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub admin_port: Option<u16>,
}

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    #[default]
    Resend,
    Smtp,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct EmailSettings {
    #[serde(default)]
    pub provider: EmailProvider,
    pub api_key: Option<CensoredString>,
    #[serde(default = "default_email_base_url")]
    pub base_url: String,
    /// Business-owner address receiving every notification email.
    pub notification_recipient: String,
    #[serde(default = "default_sender_email")]
    pub sender_email: String,
    #[serde(
        default = "default_timeout_milliseconds",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub timeout_milliseconds: u64,
    pub smtp: Option<SmtpSettings>,
}

impl EmailSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    #[serde(
        default = "default_smtp_port",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub port: u16,
    pub username: String,
    pub password: CensoredString,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct SiteSettings {
    pub business_name: String,
    pub url: String,
    pub owner_name: String,
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_email_base_url() -> String {
    "https://api.resend.com".to_owned()
}

fn default_sender_email() -> String {
    "onboarding@resend.dev".to_owned()
}

fn default_timeout_milliseconds() -> u64 {
    10_000
}

fn default_smtp_port() -> u16 {
    587
}

// Read top-level configuration file with compatible extension YAML,JSON...
// Values from APP_* environment variables (APP_EMAIL__API_KEY) take precedence,
// and the bare RESEND_API_KEY / CONTACT_EMAIL secrets win over both.
pub fn get_configuration(filename: &str) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("email.api_key", std::env::var("RESEND_API_KEY").ok())?
        .set_override_option(
            "email.notification_recipient",
            std::env::var("CONTACT_EMAIL").ok(),
        )?
        .build()?;
    settings.try_deserialize::<Settings>()
}
