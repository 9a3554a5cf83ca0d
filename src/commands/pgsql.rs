//! `devil pgsql ...`

use serde::Deserialize;

use super::{ArgumentError, BuildCommand, Command};

/// Creates the database and a user of the same name
#[derive(Debug, Clone, Deserialize)]
pub struct PgsqlDbAdd {
    pub database_name: String,
    pub password: Option<String>,
    pub collate: Option<String>,
}

impl BuildCommand for PgsqlDbAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        // The password slot is positional: an empty token asks the daemon to
        // generate one so a collation can still follow.
        Ok(Command::new(["pgsql", "db", "add"])
            .arg(self.database_name)
            .arg(self.password.unwrap_or_default())
            .opt_arg(self.collate))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PgsqlPasswd {
    pub user_name: String,
    pub password: Option<String>,
}

impl BuildCommand for PgsqlPasswd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["pgsql", "passwd"])
            .arg(self.user_name)
            .opt_arg(self.password))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PgsqlExtension {
    pub database_name: String,
    pub extension: String,
}

impl BuildCommand for PgsqlExtension {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["pgsql", "extensions"])
            .arg(self.database_name)
            .arg(self.extension))
    }
}

pub fn db_del(database_name: String) -> Command {
    Command::new(["pgsql", "db", "del"]).arg(database_name)
}

pub fn list() -> Command {
    Command::new(["pgsql", "list"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_db_add_keeps_password_slot() {
        let add: PgsqlDbAdd = serde_json::from_value(json!({
            "database_name": "p1_app",
            "collate": "pl_PL.UTF-8"
        }))
        .unwrap();
        assert_eq!(
            add.build().unwrap().args(),
            ["--json", "pgsql", "db", "add", "p1_app", "", "pl_PL.UTF-8"]
        );

        let add: PgsqlDbAdd =
            serde_json::from_value(json!({"database_name": "p1_app", "password": "pw"})).unwrap();
        assert_eq!(
            add.build().unwrap().args(),
            ["--json", "pgsql", "db", "add", "p1_app", "pw"]
        );
    }

    #[test]
    fn test_extension() {
        let ext: PgsqlExtension =
            serde_json::from_value(json!({"database_name": "p1_app", "extension": "pgcrypto"})).unwrap();
        assert_eq!(
            ext.build().unwrap().args(),
            ["--json", "pgsql", "extensions", "p1_app", "pgcrypto"]
        );
    }

    #[test]
    fn test_passwd_del_list() {
        let passwd: PgsqlPasswd = serde_json::from_value(json!({"user_name": "p1_app"})).unwrap();
        assert_eq!(passwd.build().unwrap().args(), ["--json", "pgsql", "passwd", "p1_app"]);
        assert_eq!(db_del("p1_app".into()).args(), ["--json", "pgsql", "db", "del", "p1_app"]);
        assert_eq!(list().args(), ["--json", "pgsql", "list"]);
    }
}
