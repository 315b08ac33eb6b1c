use mongodb::{bson::doc, options::IndexOptions, IndexModel};

/// Collection holding every account, whatever its role.
pub const USERS: &str = "users";

/// Database used when neither the configuration nor the connection string names one.
pub const DEFAULT_DATABASE: &str = "cabinet_medical";

/// The identifying email is unique across all accounts. Left unnamed so the
/// server derives `email_1`, the name the application backend already uses.
pub fn unique_email_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build()
}
