use crate::provision::{Arguments, Outcome};
use cabinet_db::models::{Account, Role};

/// Narrowest the credential box gets; longer rows widen it.
const BOX_WIDTH: usize = 50;
const TITLE: &str = "ADMIN ACCOUNT CREATED";

pub fn render(arguments: &Arguments, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Created(account) => created(arguments, account),
        Outcome::AlreadyExists(account) => already_exists(account),
    }
}

/// The credential summary printed once the admin account exists. Shows the
/// plaintext password exactly once, for the operator who just chose it.
pub fn created(arguments: &Arguments, account: &Account) -> String {
    let rows = [
        format!("Email:    {}", account.email),
        format!("Password: {}", arguments.password),
        format!("Name:     {} {}", account.first_name, account.last_name),
        format!("Role:     {}", account.role),
    ];
    let field = rows
        .iter()
        .map(|row| row.chars().count())
        .fold(BOX_WIDTH - 4, usize::max);
    let inner = field + 2;
    let rule = "═".repeat(inner);
    let mut lines = vec![
        String::new(),
        format!("╔{rule}╗"),
        format!("║{TITLE:^inner$}║"),
        format!("╠{rule}╣"),
    ];
    lines.extend(rows.iter().map(|row| format!("║ {row:<field$} ║")));
    lines.push(format!("╚{rule}╝"));
    lines.push(String::new());
    lines.push("Remember to change this password after the first login.".to_owned());
    lines.join("\n") + "\n"
}

pub fn already_exists(account: &Account) -> String {
    let advice = if account.role == Role::Admin {
        "This account is already an administrator.".to_owned()
    } else {
        format!(
            "To make it an administrator, update its role to {} directly in the database, \
             or delete it and run this tool again.",
            Role::Admin
        )
    };
    format!(
        "An account with email {} already exists (role: {}).\n{advice}\n",
        account.email, account.role
    )
}
