use std::net::TcpListener;

use anyhow::Context;

use concert_reservations::configuration::get_configuration;
use concert_reservations::sheet_client::SheetClient;
use concert_reservations::startup::run;
use concert_reservations::telemetry::{get_tracing_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber =
        get_tracing_subscriber("concert-reservations".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let sheet_client = SheetClient::new(
        configuration.sheet.endpoint.clone(),
        configuration.sheet.timeout(),
    );
    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Running application on {}", address);
    run(listener, sheet_client, configuration.sheet.pacing())?.await?;
    Ok(())
}
