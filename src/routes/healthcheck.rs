use crate::contact::ContactDispatcher;
use crate::routes::healthcheck_structs::{ChecksObject, EmailSenderChecks, HealthcheckObject};
use actix_web::{web, HttpResponse};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

const STATUS_PASS: &str = "pass";
const STATUS_FAIL: &str = "fail";
const STATUS_WARN: &str = "warn";

fn email_sender_checks(dispatcher: Option<&ContactDispatcher>) -> EmailSenderChecks {
    match dispatcher {
        Some(dispatcher) => EmailSenderChecks {
            status: STATUS_PASS.to_owned(),
            component_type: dispatcher.provider().to_owned(),
            output: "".to_owned(),
        },
        None => {
            tracing::error!("Could not retrieve contact dispatcher from app_data.");
            EmailSenderChecks {
                status: STATUS_FAIL.to_owned(),
                component_type: "email".to_owned(),
                output: "Email sender not configured.".to_owned(),
            }
        }
    }
}

pub async fn healthcheck(dispatcher: Option<web::Data<ContactDispatcher>>) -> HttpResponse {
    let now_string = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    let email_sender = email_sender_checks(dispatcher.as_ref().map(|data| data.get_ref()));
    let global_status = if email_sender.status == STATUS_PASS {
        STATUS_PASS
    } else {
        STATUS_WARN
    };
    HttpResponse::Ok().json(HealthcheckObject {
        status: global_status.to_owned(),
        checks: ChecksObject { email_sender },
        output: "".to_owned(),
        time: now_string,
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
