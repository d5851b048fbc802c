use subscription_admin::config::get_configuration;
use subscription_admin::startup::Application;
use subscription_admin::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(String::from("subscription_admin"), String::from("info"));

    init_subscriber(subscriber);

    let config = get_configuration().expect("Missing configuration file.");

    tracing::info!("Server listening on {}", config.get_address());

    let application = Application::build(config).await?;

    application.run_until_stop().await
}
