use anyhow::Context;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod config;
mod provision;
mod report;

/// Usage: `create-admin [email] [password] [firstName] [lastName]`
#[tokio::main]
pub async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let arguments = provision::Arguments::from_args(std::env::args().skip(1));
    match run(arguments).await {
        Ok(exit_code) => exit_code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(provision::FAILURE_STATUS)
        }
    }
}

async fn run(arguments: provision::Arguments) -> anyhow::Result<ExitCode> {
    let config = config::load().context("loading configuration")?;
    println!("Connecting to database...");
    let store = cabinet_db::Store::connect(&config.database)
        .await
        .context("connecting to database")?;
    println!("Connected.");
    let outcome = provision::provision(&store, &arguments).await;
    store.shutdown().await;
    let outcome = outcome.context("creating admin account")?;
    print!("{}", report::render(&arguments, &outcome));
    Ok(ExitCode::from(outcome.exit_status()))
}
