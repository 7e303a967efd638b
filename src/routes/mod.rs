mod contact;
mod healthcheck;
pub mod healthcheck_structs;

pub use contact::{
    contact, contact_form_config, contact_preflight, CONTACT_FAILURE_MESSAGE,
    INVALID_FORM_MESSAGE,
};
pub use healthcheck::healthcheck;
