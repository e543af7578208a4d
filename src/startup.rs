use std::{io, net};

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::routes::{contact, healthcheck, json_config, method_not_allowed};
use crate::webhook_client::WebhookClient;

/// Application
pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    /// Build an application based on settings
    pub fn build(config: &Settings) -> anyhow::Result<Self> {
        // Build the webhook client
        let webhook_client = config.webhook.client()?;

        // Run the HTTP server and return its data
        let listener = net::TcpListener::bind(format!(
            "{}:{}",
            config.application.app_host, config.application.app_port
        ))?;
        let port = listener.local_addr()?.port();
        let server = run_server(listener, webhook_client)?;
        Ok(Self { server, port })
    }

    /// Get application port
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Run application until it is stopped
    pub async fn run_until_stopped(self) -> io::Result<()> {
        self.server.await
    }
}

/// Run the HTTP server
pub fn run_server(
    listener: net::TcpListener,
    webhook_client: WebhookClient,
) -> anyhow::Result<Server> {
    // Prepare data to be added the application context
    let webhook_client = web::Data::new(webhook_client);

    // Start the HTTP server
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/healthcheck", web::get().to(healthcheck))
            .service(
                web::resource("/api/contact")
                    .route(web::post().to(contact::<WebhookClient>))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .app_data(json_config())
            .app_data(webhook_client.clone())
    })
    .listen(listener)?
    .run())
}
