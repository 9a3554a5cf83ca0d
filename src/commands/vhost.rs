//! `devil vhost ...`

use serde::Deserialize;

use super::Command;

arg_enum! {
    pub enum VhostType {
        Private => "private",
        Public => "public",
        All => "all",
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VhostListQuery {
    pub vhost_type: Option<VhostType>,
}

/// IP addresses available to the account
pub fn list(query: VhostListQuery) -> Command {
    Command::new(["vhost", "list"]).opt_arg(query.vhost_type)
}
