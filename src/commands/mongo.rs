//! `devil mongo ...`

use serde::Deserialize;

use super::{ArgumentError, BuildCommand, Command};

/// Creates the database and a user of the same name
#[derive(Debug, Clone, Deserialize)]
pub struct MongoDbAdd {
    pub database_name: String,
    pub password: Option<String>,
}

impl BuildCommand for MongoDbAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["mongo", "db", "add"])
            .arg(self.database_name)
            .opt_arg(self.password))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoPasswd {
    pub user_name: String,
    pub password: Option<String>,
}

impl BuildCommand for MongoPasswd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["mongo", "passwd"])
            .arg(self.user_name)
            .opt_arg(self.password))
    }
}

pub fn db_del(database_name: String) -> Command {
    Command::new(["mongo", "db", "del"]).arg(database_name)
}

pub fn list() -> Command {
    Command::new(["mongo", "list"])
}
