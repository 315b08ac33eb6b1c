use mongodb::{
    bson::{doc, Bson},
    error::{ErrorKind, WriteFailure},
    options::ClientOptions,
    Client, Collection,
};
use std::time::Duration;

mod memory;
pub mod models;
mod password;
mod schema;

pub use memory::MemoryStore;
pub use password::{hash_password, verify_password};

const DUPLICATE_KEY: i32 = 11000;
const INDEX_OPTIONS_CONFLICT: i32 = 85;
const INDEX_KEY_SPECS_CONFLICT: i32 = 86;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("connecting to database: {0}")]
    Connect(#[source] mongodb::error::Error),
    #[error("query failure: {0}")]
    Query(#[source] mongodb::error::Error),
    #[error("persist failure: {0}")]
    Persist(#[source] mongodb::error::Error),
    #[error("an account with email {0} already exists")]
    DuplicateEmail(String),
    #[error("required field {0} is missing")]
    MissingField(&'static str),
    #[error("password hash failed: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),
    #[error("stored password could not be parsed: {0}")]
    StoredPasswordUnparsable(argon2::password_hash::Error),
    #[error("Other General: {0}")]
    OtherGeneral(String),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default = "default_db_url")]
    pub db_url: String,
    #[serde(default)]
    pub database_name: Option<String>,
    #[serde(with = "humantime_serde", default)]
    pub connect_timeout: Option<Duration>,
    #[serde(with = "humantime_serde", default)]
    pub server_selection_timeout: Option<Duration>,
}

pub const DEFAULT_DB_URL: &str = "mongodb://localhost:27017/cabinet_medical";

fn default_db_url() -> String {
    DEFAULT_DB_URL.to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_url: default_db_url(),
            database_name: None,
            connect_timeout: None,
            server_selection_timeout: None,
        }
    }
}

/// Lookup and insertion of accounts keyed by their identifying email.
#[async_trait::async_trait]
pub trait AccountStore: Send + Sync {
    /// Exact, case-sensitive match on `email`.
    async fn find_account_by_email(&self, email: &str) -> Result<Option<models::Account>, Error>;

    /// Inserts a new account; a taken email yields [`Error::DuplicateEmail`].
    async fn insert_account(
        &self,
        account: models::HashedAccount,
    ) -> Result<models::Account, Error>;
}

/// Persists `account` after hashing its password. This is the only way to
/// turn a [`models::NewAccount`] into a stored record.
pub async fn create_account<S>(
    store: &S,
    account: models::NewAccount,
) -> Result<models::Account, Error>
where
    S: AccountStore + ?Sized,
{
    store.insert_account(account.with_hashed_password()?).await
}

#[derive(Clone, Debug)]
pub struct Store {
    client: Client,
    users: Collection<models::Account>,
}

impl Store {
    /// Opens a client, pings the server once and makes sure the unique email
    /// index exists. No retry is attempted.
    #[tracing::instrument(skip(config))]
    pub async fn connect(config: &Config) -> Result<Store, Error> {
        let mut options = ClientOptions::parse(&config.db_url)
            .await
            .map_err(Error::Connect)?;
        if config.connect_timeout.is_some() {
            options.connect_timeout = config.connect_timeout;
        }
        if config.server_selection_timeout.is_some() {
            options.server_selection_timeout = config.server_selection_timeout;
        }
        let database_name = config
            .database_name
            .clone()
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| schema::DEFAULT_DATABASE.to_owned());
        let client = Client::with_options(options).map_err(Error::Connect)?;
        let database = client.database(&database_name);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(Error::Connect)?;
        tracing::info!(database = %database_name, "connected");
        let users = database.collection::<models::Account>(schema::USERS);
        match users.create_index(schema::unique_email_index()).await {
            Ok(_) => (),
            Err(err) if command_error_code(&err).is_some_and(is_existing_index_conflict) => {
                tracing::warn!("an index on email already exists with other options: {err}");
            }
            Err(err) => return Err(Error::Persist(err)),
        }
        Ok(Store { client, users })
    }

    /// Closes the underlying client, waiting for in-flight operations.
    pub async fn shutdown(self) {
        self.client.shutdown().await
    }
}

#[async_trait::async_trait]
impl AccountStore for Store {
    #[tracing::instrument(skip(self))]
    async fn find_account_by_email(&self, email: &str) -> Result<Option<models::Account>, Error> {
        self.users
            .find_one(doc! { "email": email })
            .await
            .map_err(Error::Query)
    }

    #[tracing::instrument(skip(self, account), fields(email = account.email()))]
    async fn insert_account(
        &self,
        account: models::HashedAccount,
    ) -> Result<models::Account, Error> {
        match self.users.insert_one(account.as_document()).await {
            Ok(result) => match result.inserted_id {
                Bson::ObjectId(id) => Ok(account.into_account(id)),
                other => Err(Error::OtherGeneral(format!(
                    "unexpected inserted id: {other}"
                ))),
            },
            Err(err) if is_duplicate_key(&err) => {
                Err(Error::DuplicateEmail(account.email().to_owned()))
            }
            Err(err) => Err(Error::Persist(err)),
        }
    }
}

fn command_error_code(err: &mongodb::error::Error) -> Option<i32> {
    match err.kind.as_ref() {
        ErrorKind::Command(command_error) => Some(command_error.code),
        _ => None,
    }
}

/// The collection already has an index on the same keys, declared by whoever
/// created it first.
fn is_existing_index_conflict(code: i32) -> bool {
    code == INDEX_OPTIONS_CONFLICT || code == INDEX_KEY_SPECS_CONFLICT
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}
