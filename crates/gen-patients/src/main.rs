use anyhow::Context;
use std::io::Write;
use tracing_subscriber::EnvFilter;

mod names;
mod patient;

const PATIENT_COUNT: u32 = 500;

/// Prints a JSON array of synthetic patients for seeding a development database.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let patients = patient::generate(&mut rand::rng(), PATIENT_COUNT, jiff::Timestamp::now());
    tracing::info!(count = patients.len(), "generated patients");
    let json = serde_json::to_string_pretty(&patients).context("serializing patients")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("writing patients")?;
    stdout.flush().context("flushing output")?;
    Ok(())
}
