use std::{env, io, sync, time};

use fdlimit::raise_fd_limit;
use secrecy::SecretString;
use wiremock::MockServer;

use contact_relay::configuration::Settings;
use contact_relay::startup::Application;
use contact_relay::telemetry::{get_subscriber, init_subscriber};

/// Path of the incoming webhook on the mock chat server
pub const WEBHOOK_PATH: &str = "/services/T00000000/B00000000/XXXXXXXXXXXXXXXXXXXXXXXX";

/// Ensure the tracing stack is initialized only once
static TRACING: sync::LazyLock<()> = sync::LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            io::stdout,
        ));
    } else {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            io::sink,
        ));
    };
});

/// Test application data
pub struct TestApp {
    pub address: String,
    pub webhook_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spin up a test application and return its data
    pub async fn spawn() -> Self {
        // Initialize logging
        sync::LazyLock::force(&TRACING);

        // Raise file descriptors limit to avoid "Too many open files" error
        raise_fd_limit().expect("Failed to raise fd limit");

        // Launch a mock server to stand in for Slack's incoming webhooks
        let webhook_server = MockServer::start().await;

        // Get settings and modify them for testing
        let config = {
            let mut c = Settings::get_config().expect("Failed to read configuration");
            // Listen on a random TCP port
            c.application.app_port = 0;
            // Use the mock server as chat webhook
            c.webhook.url = SecretString::from(format!("{}{WEBHOOK_PATH}", webhook_server.uri()));
            // Keep timeout tests fast
            c.webhook.timeout_millis = 500;
            c
        };

        // Build the application and get its address
        let app = Application::build(&config).expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());

        // Run the application and return its data
        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run_until_stopped());
        Self {
            address,
            webhook_server,
            api_client: reqwest::Client::new(),
        }
    }

    /// POST a JSON body to the contact endpoint
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// POST a raw body to the contact endpoint
    pub async fn post_contact_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/contact", &self.address))
            .body(body)
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// Delay that exceeds the webhook timeout configured by `TestApp::spawn`
pub const SLOW_WEBHOOK: time::Duration = time::Duration::from_secs(5);

/// Assert: response has the specified status and JSON body
pub async fn assert_json_response(response: reqwest::Response, status: u16, body: &str) {
    assert_eq!(response.status().as_u16(), status);
    assert_eq!(
        response
            .headers()
            .get("Content-Type")
            .expect("Missing Content-Type header"),
        "application/json"
    );
    assert_eq!(response.text().await.unwrap(), body);
}
