use std::io;

use contact_relay::configuration::Settings;
use contact_relay::startup::Application;
use contact_relay::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = get_subscriber("contact-relay".into(), "info".into(), io::stdout);
    init_subscriber(subscriber);

    // Retrieve settings
    let config = Settings::get_config()?;

    // Prepare and run the application
    let application = Application::build(&config)?;
    tracing::info!(port = application.port(), "Serving the contact endpoint");
    application.run_until_stopped().await?;

    Ok(())
}
