use anyhow::Context;
use std::{io::Read, path::Path};

const CONFIG_FILE: &str = "./admin-config.toml";

#[derive(Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub database: cabinet_db::Config,
}

/// Reads `./admin-config.toml` when present, then lets `MONGODB_URI` (from
/// the environment or a `.env` file) override the connection string.
pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();
    let mut config = if Path::new(CONFIG_FILE).exists() {
        parse(&read(CONFIG_FILE)?)?
    } else {
        Config::default()
    };
    if let Ok(db_url) = std::env::var("MONGODB_URI") {
        config.database.db_url = db_url;
    }
    Ok(config)
}

fn read(path: &str) -> anyhow::Result<String> {
    let mut configuration = String::with_capacity(1024);
    std::fs::File::open(path)
        .with_context(|| format!("unable to open configuration file {path}"))?
        .read_to_string(&mut configuration)
        .with_context(|| format!("unable to read configuration file {path}"))?;
    Ok(configuration)
}

fn parse(configuration: &str) -> anyhow::Result<Config> {
    toml::from_str::<Config>(configuration)
        .with_context(|| format!("unable to parse configuration file {CONFIG_FILE}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_empty_file_uses_the_local_default() {
        let config = parse("").expect("should parse");
        assert_eq!(config.database.db_url, cabinet_db::DEFAULT_DB_URL);
    }

    #[test]
    fn it_reads_the_database_table() {
        let config = parse(
            r#"
            [database]
            db-url = "mongodb://mongo:27017/cabinet"
            database-name = "cabinet"
            server-selection-timeout = "10s"
            "#,
        )
        .expect("should parse");
        assert_eq!(config.database.db_url, "mongodb://mongo:27017/cabinet");
        assert_eq!(config.database.database_name.as_deref(), Some("cabinet"));
        assert_eq!(
            config.database.server_selection_timeout,
            Some(std::time::Duration::from_secs(10))
        );
    }

    #[test]
    fn it_rejects_malformed_files() {
        assert!(parse("[database\n").is_err());
    }
}
