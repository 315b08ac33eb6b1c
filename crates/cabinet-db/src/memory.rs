use crate::{models, AccountStore, Error};
use mongodb::bson::oid::ObjectId;
use std::sync::{Mutex, MutexGuard};

/// Keeps accounts in process memory, enforcing the same unique email rule as
/// the database index.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: Mutex<Vec<models::Account>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accounts(&self) -> Result<Vec<models::Account>, Error> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<models::Account>>, Error> {
        self.accounts
            .lock()
            .map_err(|_| Error::OtherGeneral("memory store lock poisoned".to_owned()))
    }
}

#[async_trait::async_trait]
impl AccountStore for MemoryStore {
    async fn find_account_by_email(&self, email: &str) -> Result<Option<models::Account>, Error> {
        Ok(self
            .lock()?
            .iter()
            .find(|account| account.email == email)
            .cloned())
    }

    async fn insert_account(
        &self,
        account: models::HashedAccount,
    ) -> Result<models::Account, Error> {
        let mut accounts = self.lock()?;
        if accounts.iter().any(|stored| stored.email == account.email()) {
            return Err(Error::DuplicateEmail(account.email().to_owned()));
        }
        let account = account.into_account(ObjectId::new());
        accounts.push(account.clone());
        Ok(account)
    }
}
