//! `devil info ...`

use super::Command;

pub fn limits() -> Command {
    Command::new(["info", "limits"])
}

pub fn account() -> Command {
    Command::new(["info", "account"])
}
