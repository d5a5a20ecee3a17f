use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use unicorn_seed::{run_seed_unicorns, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise tracing (INFO level)
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;
    let summary = run_seed_unicorns(&config).await?;

    tracing::debug!(?summary, "seed run finished");
    Ok(())
}
