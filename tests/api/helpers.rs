use std::net::TcpListener;

use once_cell::sync::Lazy;
use wiremock::MockServer;

use concert_reservations::configuration::get_configuration;
use concert_reservations::reservation_form::DeliveryPacing;
use concert_reservations::sheet_client::SheetClient;
use concert_reservations::telemetry::{get_tracing_subscriber, init_subscriber};

// the outbound client times out after this long; mocks that delay longer make delivery fail
pub const SHEET_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(200);

// ensure that the tracing stack is only initialized once
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_tracing_subscriber("test".into(), "debug".into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_tracing_subscriber("test".into(), "debug".into(), std::io::sink);
        init_subscriber(subscriber);
    }
});

// A struct holding data needed to drive a test version of our application
pub struct TestApp {
    pub address: String,
    // stands in for the third-party spreadsheet endpoint
    pub sheet_server: MockServer,
}

impl TestApp {
    pub async fn get_home(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_reservation(&self, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/reservations", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_reservation_alternate(&self, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/reservations/alternate", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

// Spawns an app wired to a fresh mock sheet endpoint and returns the configured TestApp.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind a random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_configuration().expect("Failed to read configuration.");
    let sheet_server = MockServer::start().await;
    configuration.sheet.endpoint = sheet_server.uri();

    let sheet_client = SheetClient::new(configuration.sheet.endpoint.clone(), SHEET_TIMEOUT);
    // keep the deferrals short so the suite stays fast
    let pacing = DeliveryPacing {
        dispatch_delay: std::time::Duration::from_millis(5),
        settle_delay: std::time::Duration::from_millis(10),
    };

    let server = concert_reservations::startup::run(listener, sheet_client, pacing)
        .expect("Failed to bind address");
    let _ = tokio::spawn(server);
    TestApp {
        address,
        sheet_server,
    }
}

/// URL-encodes a full five-field reservation body.
pub fn reservation_body(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
    message: &str,
) -> String {
    serde_urlencoded::to_string([
        ("firstName", first_name),
        ("lastName", last_name),
        ("email", email),
        ("phone", phone),
        ("message", message),
    ])
    .expect("Failed to encode form body")
}
