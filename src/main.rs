use tokio::net::TcpListener;

use home_service::configuration::get_configuration;
use home_service::startup::run;
use home_service::telemetry::{get_subscriber, initialize_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("home-service".into(), "info".into(), std::io::stdout);
    initialize_subscriber(subscriber);

    let configuration = get_configuration()?;
    let listener = TcpListener::bind(configuration.application.address()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    run(listener).await?;

    Ok(())
}
