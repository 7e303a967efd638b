use contact_rs::censoredstring::CensoredString;
use contact_rs::contact::{ContactDispatcher, ContactIdentity};
use contact_rs::email_client::ResendEmailClient;
use contact_rs::telemetry::{get_subscriber, init_subscriber};
use httpmock::MockServer;
use std::io::{sink, stdout};
use std::net::TcpListener;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

pub const OWNER_EMAIL: &str = "owner@example.com";

// Initialize tracing once for the whole test binary
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let filter_level = "debug".to_owned();
    let subscriber_name = "test".to_owned();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, filter_level, stdout);
        init_subscriber(subscriber).expect("Failed to initialize subscriber to stdout");
    } else {
        let subscriber = get_subscriber(subscriber_name, filter_level, sink);
        init_subscriber(subscriber).expect("Failed to initialize subscriber");
    }
});

pub struct TestApp {
    pub address: String,
    pub admin_address: Option<String>,
    pub email_server: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact<Body: serde::Serialize>(&self, body: &Body) -> reqwest::Response {
        let body = serde_urlencoded::to_string(body).expect("Failed to encode form body");
        self.post_contact_raw(body).await
    }

    pub async fn post_contact_raw(&self, body: String) -> reqwest::Response {
        let contact_route = format!("{}/api/contact", self.address);
        self.client
            .post(&contact_route)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .unwrap_or_else(|error| panic!("Failed POST request to {}: {}", contact_route, error))
    }
}

fn bind_random_port() -> (TcpListener, String) {
    let local_addr = "127.0.0.1";
    let listener = TcpListener::bind((local_addr, 0)).expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    (listener, format!("http://{}:{}", local_addr, port))
}

// Launch an instance for our HTTP server in the background, sending email
// through a mock of the Resend API
pub async fn launch_http_server(with_admin_listener: bool) -> TestApp {
    LazyLock::force(&TRACING);
    let email_server = MockServer::start_async().await;
    let email_client = ResendEmailClient::new(
        email_server.base_url(),
        CensoredString::from("re_test_key"),
        Duration::from_millis(500),
    )
    .expect("Failed to build email client");
    let identity = ContactIdentity {
        sender: "Simon Wickes Photography <onboarding@resend.dev>".to_owned(),
        notification_recipient: OWNER_EMAIL.to_owned(),
        site_url: "https://simonwickes.com".to_owned(),
        owner_name: "Simon Wickes".to_owned(),
    };
    let dispatcher = ContactDispatcher::new(Arc::new(email_client), identity);
    let (listener, address) = bind_random_port();
    let (admin_listener, admin_address) = if with_admin_listener {
        let (admin_listener, admin_address) = bind_random_port();
        (Some(admin_listener), Some(admin_address))
    } else {
        (None, None)
    };
    let (server, admin_server) = contact_rs::startup::run(listener, admin_listener, dispatcher)
        .expect("Failed to listen on address");
    let _ = tokio::spawn(server);
    if let Some(admin_server) = admin_server {
        let _ = tokio::spawn(admin_server);
    }
    TestApp {
        address,
        admin_address,
        email_server,
        client: reqwest::Client::new(),
    }
}
