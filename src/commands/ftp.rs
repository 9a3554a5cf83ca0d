//! `devil ftp ...`

use serde::Deserialize;

use super::{ArgumentError, BuildCommand, Command};

#[derive(Debug, Clone, Deserialize)]
pub struct FtpAdd {
    pub username: String,
    /// Home directory, absolute or relative to the account home
    pub directory: String,
    /// e.g. `2G`, `300M`
    pub quota: String,
    pub password: Option<String>,
}

impl BuildCommand for FtpAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["ftp", "add"])
            .arg(self.username)
            .arg(self.directory)
            .arg(self.quota)
            .opt_arg(self.password))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FtpPasswd {
    pub username: String,
    pub password: Option<String>,
}

impl BuildCommand for FtpPasswd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["ftp", "passwd"])
            .arg(self.username)
            .opt_arg(self.password))
    }
}

/// New quota, or the literal `recalc` to recount usage
#[derive(Debug, Clone, Deserialize)]
pub struct FtpQuota {
    pub username: String,
    pub quota: String,
}

impl BuildCommand for FtpQuota {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["ftp", "quota"])
            .arg(self.username)
            .arg(self.quota))
    }
}

pub fn del(username: String) -> Command {
    Command::new(["ftp", "del"]).arg(username)
}

pub fn list() -> Command {
    Command::new(["ftp", "list"])
}
