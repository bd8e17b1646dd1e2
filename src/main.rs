use railcast::config::Config;
use railcast::util::trace::initialize_tracer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), railcast::Error> {
    // Load `.env` and the environment first, a bad value is fatal.
    let config = Config::from_env()?;

    initialize_tracer()?;
    tracing::info!(?config, "Loaded configuration");

    railcast::server::serve(config).await
}
