// Healthcheck response format for HTTP APIs https://inadarei.github.io/rfc-healthcheck/
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct HealthcheckObject {
    pub status: String,
    pub checks: ChecksObject,
    pub output: String,
    pub time: String,
    pub version: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct ChecksObject {
    pub email_sender: EmailSenderChecks,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct EmailSenderChecks {
    pub status: String,
    pub component_type: String,
    pub output: String,
}
