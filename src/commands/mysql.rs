//! `devil mysql ...`

use serde::Deserialize;

use super::{ArgumentError, BuildCommand, Command};

arg_enum! {
    pub enum Privilege {
        All => "ALL",
        Select => "SELECT",
        Insert => "INSERT",
        Update => "UPDATE",
        Delete => "DELETE",
        Create => "CREATE",
        Alter => "ALTER",
        Index => "INDEX",
        Drop => "DROP",
        CreateTemporaryTables => "CREATE_TEMPORARY_TABLES",
        ShowView => "SHOW_VIEW",
        CreateRoutine => "CREATE_ROUTINE",
        AlterRoutine => "ALTER_ROUTINE",
        Execute => "EXECUTE",
        CreateView => "CREATE_VIEW",
        Event => "EVENT",
        Trigger => "TRIGGER",
        LockTables => "LOCK_TABLES",
        References => "REFERENCES",
    }
}

/// A single `+PRIV` / `-PRIV` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrivilegeOp {
    pub grant: bool,
    pub privilege: Privilege,
}

impl PrivilegeOp {
    /// Parse one entry after trimming and upper-casing it.
    pub fn parse(raw: &str) -> Result<Self, ArgumentError> {
        let normalized = raw.trim().to_uppercase();
        let (grant, name) = if let Some(name) = normalized.strip_prefix('+') {
            (true, name)
        } else if let Some(name) = normalized.strip_prefix('-') {
            (false, name)
        } else {
            return Err(invalid_privilege(&normalized));
        };
        let privilege = Privilege::from_token(name).ok_or_else(|| invalid_privilege(&normalized))?;
        Ok(Self { grant, privilege })
    }
}

impl std::fmt::Display for PrivilegeOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.grant { '+' } else { '-' };
        write!(f, "{}{}", sign, self.privilege)
    }
}

fn invalid_privilege(entry: &str) -> ArgumentError {
    ArgumentError::rejected(
        "mysql_privileges",
        format!("Invalid privilege spec '{}'. Expect +|-(PRIVILEGE)", entry),
    )
}

/// Validate a privilege list: non-empty, `ALL` alone, no `+X` next to `-X`.
/// Duplicates collapse to their first occurrence.
pub fn normalize_privileges(entries: &[String]) -> Result<Vec<PrivilegeOp>, ArgumentError> {
    if entries.is_empty() {
        return Err(ArgumentError::rejected(
            "mysql_privileges",
            "At least one privilege operation must be provided",
        ));
    }

    let mut cleaned: Vec<PrivilegeOp> = Vec::with_capacity(entries.len());
    for entry in entries {
        let op = PrivilegeOp::parse(entry)?;
        if op.privilege == Privilege::All && entries.len() > 1 {
            return Err(ArgumentError::rejected(
                "mysql_privileges",
                "+ALL or -ALL must be the only privilege if specified",
            ));
        }
        if cleaned
            .iter()
            .any(|prev| prev.privilege == op.privilege && prev.grant != op.grant)
        {
            return Err(ArgumentError::rejected(
                "mysql_privileges",
                format!("Conflicting privilege operations for '{}' specified", op.privilege),
            ));
        }
        if !cleaned.contains(&op) {
            cleaned.push(op);
        }
    }
    Ok(cleaned)
}

/// Collation names are lowercase identifiers such as `utf8mb4_polish_ci`
fn validate_collate(collate: &str) -> Result<(), ArgumentError> {
    let valid = !collate.is_empty()
        && collate
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ArgumentError::rejected(
            "collate",
            format!("'{}' is not a valid collation name", collate),
        ))
    }
}

fn user_part(user_name: String, host_name: Option<String>) -> String {
    match host_name {
        Some(host) if !host.is_empty() => format!("{}@{}", user_name, host),
        _ => user_name,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MysqlDbAdd {
    pub database_name: String,
    pub collate: Option<String>,
}

impl BuildCommand for MysqlDbAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        if let Some(collate) = &self.collate {
            validate_collate(collate)?;
        }
        Ok(Command::new(["mysql", "db", "add"])
            .arg(self.database_name)
            .opt_arg(self.collate))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MysqlUserAdd {
    pub user_name: String,
    pub password: Option<String>,
}

impl BuildCommand for MysqlUserAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["mysql", "user", "add"])
            .arg(self.user_name)
            .opt_arg(self.password))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MysqlAccessAdd {
    pub user_name: String,
    pub host_name: String,
}

impl BuildCommand for MysqlAccessAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["mysql", "access", "add"])
            .arg(format!("{}@{}", self.user_name, self.host_name)))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MysqlPrivileges {
    pub user_name: String,
    pub host_name: Option<String>,
    pub database_name: String,
    pub mysql_privileges: Vec<String>,
}

impl BuildCommand for MysqlPrivileges {
    fn build(self) -> Result<Command, ArgumentError> {
        let ops = normalize_privileges(&self.mysql_privileges)?;
        let joined = ops
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Ok(Command::new(["mysql", "privileges"])
            .arg(user_part(self.user_name, self.host_name))
            .arg(self.database_name)
            .arg(joined))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MysqlPasswd {
    pub user_name: String,
    pub host_name: Option<String>,
    pub password: Option<String>,
}

impl BuildCommand for MysqlPasswd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["mysql", "passwd"])
            .arg(user_part(self.user_name, self.host_name))
            .opt_arg(self.password))
    }
}

pub fn db_del(database_name: String) -> Command {
    Command::new(["mysql", "db", "del"]).arg(database_name)
}

pub fn user_del(user_name: String) -> Command {
    Command::new(["mysql", "user", "del"]).arg(user_name)
}

/// `account` is `user@host`; both halves must be present.
pub fn access_del(account: &str) -> Result<Command, ArgumentError> {
    match account.split_once('@') {
        Some((user, host)) if !user.is_empty() && !host.is_empty() => {
            Ok(Command::new(["mysql", "access", "del"]).arg(format!("{}@{}", user, host)))
        }
        _ => Err(ArgumentError::invalid(format!(
            "Expected user@host, got '{}'",
            account
        ))),
    }
}

pub fn list() -> Command {
    Command::new(["mysql", "list"])
}
