mod common;

use common::launch_http_server;
use contact_rs::routes::healthcheck_structs::HealthcheckObject;

#[tokio::test]
async fn healthcheck_endpoint() {
    // Arrange
    let app = launch_http_server(false).await;
    // Act
    // Client library makes HTTP requests against server
    let healthcheck_route = &format!("{}/healthcheck", app.address);
    let response = app
        .client
        .get(healthcheck_route)
        .send()
        .await
        .unwrap_or_else(|_| panic!("Failed GET request to {}", healthcheck_route));
    // Assert
    // Status 200 OK
    assert!(response.status().is_success());
    let healthcheck: HealthcheckObject = response.json().await.unwrap();
    assert_eq!(healthcheck.status, "pass");
    assert_eq!(healthcheck.checks.email_sender.status, "pass");
    assert_eq!(healthcheck.checks.email_sender.component_type, "resend");
    assert_eq!(healthcheck.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn healthcheck_moves_to_admin_listener() {
    // Arrange
    let app = launch_http_server(true).await;
    let admin_address = app.admin_address.clone().expect("Admin listener not started");
    // Act
    let admin_response = app
        .client
        .get(format!("{}/healthcheck", admin_address))
        .send()
        .await
        .unwrap();
    let public_response = app
        .client
        .get(format!("{}/healthcheck", app.address))
        .send()
        .await
        .unwrap();
    // Assert
    assert_eq!(200, admin_response.status().as_u16());
    assert_eq!(404, public_response.status().as_u16());
}

#[tokio::test]
async fn contact_rejects_get_requests() {
    // Arrange
    let app = launch_http_server(false).await;
    // Act
    let response = app
        .client
        .get(format!("{}/api/contact", app.address))
        .send()
        .await
        .unwrap();
    // Assert
    assert_eq!(405, response.status().as_u16());
}
