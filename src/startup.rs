use crate::configuration::{EmailProvider, EmailSettings, Settings};
use crate::contact::{ContactDispatcher, ContactIdentity};
use crate::email_client::{EmailSender, ResendEmailClient};
use crate::routes::{contact, contact_form_config, contact_preflight, healthcheck};
use crate::smtp_email_sender::SmtpEmailSender;
use actix_web::{dev::Server, http::Method, web, App, HttpServer};
use anyhow::{anyhow, Context};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

// The site posts to /api/contact; /contact is kept for direct form posts
pub const CONTACT_PATHS: [&str; 2] = ["/contact", "/api/contact"];

/// Build the one email sender shared by every request.
pub fn build_email_sender(settings: &EmailSettings) -> anyhow::Result<Arc<dyn EmailSender>> {
    match settings.provider {
        EmailProvider::Resend => {
            let api_key = settings
                .api_key
                .clone()
                .filter(|api_key| !api_key.is_empty())
                .ok_or_else(|| anyhow!("email.api_key is required for the resend provider"))?;
            let client =
                ResendEmailClient::new(settings.base_url.clone(), api_key, settings.timeout())
                    .context("Failed to build Resend HTTP client")?;
            Ok(Arc::new(client))
        }
        EmailProvider::Smtp => {
            let smtp_settings = settings
                .smtp
                .as_ref()
                .ok_or_else(|| anyhow!("email.smtp is required for the smtp provider"))?;
            let sender = SmtpEmailSender::new(smtp_settings, settings.timeout())
                .with_context(|| format!("Failed to build SMTP relay to {}", smtp_settings.host))?;
            Ok(Arc::new(sender))
        }
    }
}

pub fn build_dispatcher(settings: &Settings) -> anyhow::Result<ContactDispatcher> {
    let email_sender = build_email_sender(&settings.email)?;
    Ok(ContactDispatcher::new(
        email_sender,
        ContactIdentity::from_settings(settings),
    ))
}

fn contact_routes(cfg: &mut web::ServiceConfig) {
    for path in CONTACT_PATHS {
        cfg.service(
            web::resource(path)
                .route(web::post().to(contact))
                .route(web::method(Method::OPTIONS).to(contact_preflight)),
        );
    }
}

/// Serve the contact routes on `listener`. The healthcheck is served on
/// `admin_listener` when one is given, otherwise next to the contact routes.
pub fn run(
    listener: TcpListener,
    admin_listener: Option<TcpListener>,
    dispatcher: ContactDispatcher,
) -> Result<(Server, Option<Server>), std::io::Error> {
    let dispatcher = web::Data::new(dispatcher);
    let healthcheck_on_main = admin_listener.is_none();
    let dispatcher1 = dispatcher.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            // Request spans with request id
            .wrap(TracingLogger::default())
            .app_data(contact_form_config())
            .app_data(dispatcher1.clone())
            .configure(contact_routes);
        if healthcheck_on_main {
            app.route("/healthcheck", web::get().to(healthcheck))
        } else {
            app
        }
    })
    .listen(listener)?
    .run();
    let admin_listener = match admin_listener {
        Some(admin_listener) => admin_listener,
        None => return Ok((server, None)),
    };
    let admin_server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(dispatcher.clone())
            .route("/healthcheck", web::get().to(healthcheck))
    })
    .listen(admin_listener)?
    .run();
    Ok((server, Some(admin_server)))
}
