pub mod censoredstring;
pub mod configuration;
pub mod contact;
pub mod email_client;
pub mod routes;
pub mod smtp_email_sender;
pub mod startup;
pub mod telemetry;
