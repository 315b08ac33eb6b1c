use cabinet_db::{
    models::{Account, NewAccount, Role},
    AccountStore,
};

pub const DEFAULT_EMAIL: &str = "admin@cabinet.tn";
pub const DEFAULT_PASSWORD: &str = "Admin@123";
pub const DEFAULT_FIRST_NAME: &str = "Admin";
pub const DEFAULT_LAST_NAME: &str = "Cabinet";
pub const SPECIALIZATION: &str = "Administration";

pub const SUCCESS_STATUS: u8 = 0;
pub const FAILURE_STATUS: u8 = 1;

/// Positional `[email] [password] [firstName] [lastName]`, each defaulted when absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arguments {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Arguments {
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut args = args.into_iter();
        let mut next_or = |default: &str| args.next().unwrap_or_else(|| default.to_owned());
        Self {
            email: next_or(DEFAULT_EMAIL),
            password: next_or(DEFAULT_PASSWORD),
            first_name: next_or(DEFAULT_FIRST_NAME),
            last_name: next_or(DEFAULT_LAST_NAME),
        }
    }

    fn new_admin(&self) -> NewAccount {
        NewAccount {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: Role::Admin,
            phone_number: None,
            specialization: Some(SPECIALIZATION.to_owned()),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Created(Account),
    /// Nothing was written; holds the account already using the email.
    AlreadyExists(Account),
}

impl Outcome {
    /// Process exit status: only a freshly created account counts as success.
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::Created(_) => SUCCESS_STATUS,
            Outcome::AlreadyExists(_) => FAILURE_STATUS,
        }
    }
}

#[tracing::instrument(skip(store, arguments), fields(email = %arguments.email))]
pub async fn provision<S>(store: &S, arguments: &Arguments) -> Result<Outcome, cabinet_db::Error>
where
    S: AccountStore + ?Sized,
{
    if let Some(existing) = store.find_account_by_email(&arguments.email).await? {
        tracing::warn!(role = %existing.role, "account already exists");
        return Ok(Outcome::AlreadyExists(existing));
    }
    let account = cabinet_db::create_account(store, arguments.new_admin()).await?;
    tracing::info!("admin account created");
    Ok(Outcome::Created(account))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinet_db::MemoryStore;

    fn arguments(email: &str) -> Arguments {
        Arguments {
            email: email.to_owned(),
            password: "pw1".to_owned(),
            first_name: "X".to_owned(),
            last_name: "Y".to_owned(),
        }
    }

    #[test]
    fn it_defaults_missing_arguments() {
        assert_eq!(
            Arguments::from_args(Vec::new()),
            Arguments {
                email: DEFAULT_EMAIL.to_owned(),
                password: DEFAULT_PASSWORD.to_owned(),
                first_name: "Admin".to_owned(),
                last_name: "Cabinet".to_owned(),
            }
        );
        let partial = Arguments::from_args(["boss@cabinet.tn".to_owned(), "pw".to_owned()]);
        assert_eq!(partial.email, "boss@cabinet.tn");
        assert_eq!(partial.password, "pw");
        assert_eq!(partial.first_name, DEFAULT_FIRST_NAME);
        assert_eq!(partial.last_name, DEFAULT_LAST_NAME);
    }

    #[tokio::test]
    async fn it_creates_an_admin_in_an_empty_store() {
        let store = MemoryStore::new();
        let outcome = provision(&store, &arguments("a@b.com"))
            .await
            .expect("should provision");
        let created = match outcome {
            Outcome::Created(created) => created,
            other => panic!("expected a new account, got {other:?}"),
        };
        let stored = store.accounts().expect("should list");
        assert_eq!(stored.len(), 1);
        let stored = &stored[0];
        assert_eq!(stored.id, created.id);
        assert_eq!(stored.first_name, "X");
        assert_eq!(stored.last_name, "Y");
        assert_eq!(stored.email, "a@b.com");
        assert_eq!(stored.role, Role::Admin);
        assert_eq!(stored.specialization.as_deref(), Some(SPECIALIZATION));
        assert_ne!(stored.password, "pw1");
        assert!(cabinet_db::verify_password("pw1", &stored.password).expect("should verify"));
    }

    #[tokio::test]
    async fn it_writes_nothing_when_the_email_is_taken() {
        let store = MemoryStore::new();
        provision(&store, &arguments("a@b.com"))
            .await
            .expect("should provision");
        let outcome = provision(&store, &arguments("a@b.com"))
            .await
            .expect("should check existence");
        let existing = match outcome {
            Outcome::AlreadyExists(existing) => existing,
            other => panic!("expected the existing account, got {other:?}"),
        };
        assert_eq!(existing.role, Role::Admin);
        assert_eq!(store.accounts().expect("should list").len(), 1);
    }

    #[tokio::test]
    async fn a_repeated_run_exits_with_failure_and_stores_one_account() {
        let store = MemoryStore::new();
        let arguments = Arguments::from_args(["a@b.com", "pw1", "X", "Y"].map(String::from));
        let first = provision(&store, &arguments)
            .await
            .expect("should provision");
        assert_eq!(first.exit_status(), 0);
        let second = provision(&store, &arguments)
            .await
            .expect("should check existence");
        assert_eq!(second.exit_status(), 1);
        let stored = store.accounts().expect("should list");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].email, "a@b.com");
        assert_eq!(stored[0].first_name, "X");
        assert_eq!(stored[0].last_name, "Y");
        assert_eq!(stored[0].role, Role::Admin);
        assert_ne!(stored[0].password, "pw1");
    }

    #[tokio::test]
    async fn it_reports_an_existing_account_of_any_role() {
        let store = MemoryStore::new();
        cabinet_db::create_account(
            &store,
            NewAccount {
                role: Role::Secretary,
                specialization: None,
                ..arguments("desk@cabinet.tn").new_admin()
            },
        )
        .await
        .expect("should seed secretary");
        let outcome = provision(&store, &arguments("desk@cabinet.tn"))
            .await
            .expect("should check existence");
        assert!(matches!(outcome, Outcome::AlreadyExists(ref a) if a.role == Role::Secretary));
        assert_eq!(store.accounts().expect("should list").len(), 1);
    }

    #[tokio::test]
    async fn it_surfaces_persistence_failures() {
        let store = MemoryStore::new();
        let err = provision(&store, &arguments(""))
            .await
            .expect_err("empty email should fail to persist");
        assert!(matches!(err, cabinet_db::Error::MissingField("email")));
        assert!(store.accounts().expect("should list").is_empty());
    }
}
