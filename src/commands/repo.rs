//! `devil repo ...`

use serde::Deserialize;

use super::{ArgumentError, BuildCommand, Command};

arg_enum! {
    pub enum RepoType {
        Git => "git",
        Svn => "svn",
        Hg => "hg",
    }
}

arg_enum! {
    pub enum RepoVisibility {
        Public => "pub",
        Private => "priv",
    }
}

/// Body shared by `repository add` and `repository change`
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRepository {
    pub repo_type: RepoType,
    pub repo_name: String,
    pub repo_visibility: RepoVisibility,
}

impl RepoRepository {
    pub fn add(self) -> Command {
        self.command("add")
    }

    /// Switch an existing repository's visibility
    pub fn change(self) -> Command {
        self.command("change")
    }

    fn command(self, action: &str) -> Command {
        Command::new(["repo", "repository", action])
            .arg(self.repo_type)
            .arg(self.repo_name)
            .arg(self.repo_visibility)
    }
}

/// Body shared by `account add` and `account passwd`
#[derive(Debug, Clone, Deserialize)]
pub struct RepoAccount {
    pub repo_type: RepoType,
    pub repo_name: String,
    pub repo_username: String,
    pub password: Option<String>,
}

impl RepoAccount {
    pub fn add(self) -> Command {
        self.command("add")
    }

    pub fn passwd(self) -> Command {
        self.command("passwd")
    }

    fn command(self, action: &str) -> Command {
        Command::new(["repo", "account", action])
            .arg(self.repo_type)
            .arg(self.repo_name)
            .arg(self.repo_username)
            .opt_arg(self.password)
    }
}

/// Repositories, or the accounts of one repository
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoListQuery {
    pub repo_type: Option<RepoType>,
    pub repo_name: Option<String>,
}

impl BuildCommand for RepoListQuery {
    fn build(self) -> Result<Command, ArgumentError> {
        let cmd = Command::new(["repo", "list"]);
        let repo_name = self.repo_name.filter(|name| !name.is_empty());
        match (self.repo_type, repo_name) {
            (Some(repo_type), Some(repo_name)) => Ok(cmd.arg(repo_type).arg(repo_name)),
            (None, None) => Ok(cmd),
            _ => Err(ArgumentError::invalid(
                "Provide both repo_type and repo_name or neither",
            )),
        }
    }
}

pub fn repository_del(repo_type: RepoType, repo_name: String) -> Command {
    Command::new(["repo", "repository", "del"])
        .arg(repo_type)
        .arg(repo_name)
}

pub fn account_del(repo_type: RepoType, repo_name: String, repo_username: String) -> Command {
    Command::new(["repo", "account", "del"])
        .arg(repo_type)
        .arg(repo_name)
        .arg(repo_username)
}
