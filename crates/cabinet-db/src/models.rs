use mongodb::bson::{oid::ObjectId, DateTime};

/// Roles an account may hold. `Admin` is the only elevated role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Doctor,
    Secretary,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Doctor => "DOCTOR",
            Role::Secretary => "SECRETARY",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An account as stored in the `users` collection.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Salted one-way hash in PHC string format, never the plaintext.
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub specialization: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// An account that has not been persisted yet. Holds the plaintext password,
/// so it can only reach a store through [`NewAccount::with_hashed_password`].
#[derive(Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone_number: Option<String>,
    pub specialization: Option<String>,
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("phone_number", &self.phone_number)
            .field("specialization", &self.specialization)
            .finish()
    }
}

impl NewAccount {
    /// Checks required fields, replaces the plaintext password with its hash
    /// and stamps the creation time.
    pub fn with_hashed_password(self) -> Result<HashedAccount, crate::Error> {
        for (field, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.is_empty() {
                return Err(crate::Error::MissingField(field));
            }
        }
        let password = crate::password::hash_password(&self.password)?;
        let now = DateTime::from_millis(jiff::Timestamp::now().as_millisecond());
        Ok(HashedAccount(Account {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password,
            role: self.role,
            phone_number: self.phone_number,
            specialization: self.specialization,
            created_at: now,
            updated_at: now,
        }))
    }
}

/// An account ready for insertion, its password already hashed.
#[derive(Clone, Debug)]
pub struct HashedAccount(Account);

impl HashedAccount {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub(crate) fn into_account(self, id: ObjectId) -> Account {
        Account {
            id: Some(id),
            ..self.0
        }
    }

    pub(crate) fn as_document(&self) -> &Account {
        &self.0
    }
}
