//! `devil mail ...`

use serde::Deserialize;

use super::{ArgumentError, BuildCommand, Command};

arg_enum! {
    /// Per-domain mail settings accepted by `mail options`
    pub enum MailOption {
        Rbl => "rbl",
        SpamFilter => "spamfilter",
        RestrictSpf => "restrictspf",
        MoveSpam => "movespam",
        OutgoingIp => "outgoingip",
        AllowNets => "allownets",
        HideSenderIp => "hidesenderip",
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailAccountAdd {
    pub email_mailbox: String,
    pub password: Option<String>,
}

impl BuildCommand for MailAccountAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["mail", "account", "add"])
            .arg(self.email_mailbox)
            .opt_arg(self.password))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailAliasAdd {
    pub email_from: String,
    pub email_to: String,
}

impl BuildCommand for MailAliasAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["mail", "alias", "add"])
            .arg(self.email_from)
            .arg(self.email_to))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailPasswd {
    pub email_mailbox: String,
    pub password: Option<String>,
}

impl BuildCommand for MailPasswd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["mail", "passwd"])
            .arg(self.email_mailbox)
            .opt_arg(self.password))
    }
}

/// `mail options DOMAIN OPTION VALUE`; the value format depends on the
/// option (`on`/`off`, an address, a comma-separated list) and is checked
/// by the daemon.
#[derive(Debug, Clone, Deserialize)]
pub struct MailOptions {
    pub email_domain: String,
    pub option: MailOption,
    pub value: String,
}

impl BuildCommand for MailOptions {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["mail", "options"])
            .arg(self.email_domain)
            .arg(self.option)
            .arg(self.value))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailQuota {
    pub email_mailbox: String,
    pub mail_quota: String,
}

impl BuildCommand for MailQuota {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["mail", "quota"])
            .arg(self.email_mailbox)
            .arg(self.mail_quota))
    }
}

/// Body shared by whitelist add and DKIM sign
#[derive(Debug, Clone, Deserialize)]
pub struct MailDomain {
    pub domain: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MailListQuery {
    pub email_domain: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DkimDnsQuery {
    #[serde(default)]
    pub print_record: bool,
}

pub fn account_del(email_mailbox: String) -> Command {
    Command::new(["mail", "account", "del"]).arg(email_mailbox)
}

pub fn alias_del(email_from: String) -> Command {
    Command::new(["mail", "alias", "del"]).arg(email_from)
}

/// Domains, or mailboxes and aliases of one domain
pub fn list(query: MailListQuery) -> Command {
    Command::new(["mail", "list"]).opt_arg(query.email_domain)
}

pub fn whitelist_add(body: MailDomain) -> Command {
    Command::new(["mail", "whitelist", "add"]).arg(body.domain)
}

pub fn whitelist_del(domain: String) -> Command {
    Command::new(["mail", "whitelist", "del"]).arg(domain)
}

pub fn whitelist_list() -> Command {
    Command::new(["mail", "whitelist", "list"])
}

pub fn dkim_sign(body: MailDomain) -> Command {
    Command::new(["mail", "dkim", "sign"]).arg(body.domain)
}

pub fn dkim_dns(domain: String, query: DkimDnsQuery) -> Command {
    Command::new(["mail", "dkim", "dns"])
        .arg(domain)
        .flag("--print", query.print_record)
}

pub fn dkim_unsign(domain: String) -> Command {
    Command::new(["mail", "dkim", "unsign"]).arg(domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_add() {
        let add: MailAccountAdd =
            serde_json::from_value(json!({"email_mailbox": "a@example.com"})).unwrap();
        assert_eq!(
            add.build().unwrap().args(),
            ["--json", "mail", "account", "add", "a@example.com"]
        );
    }

    #[test]
    fn test_options_enum_tokens() {
        let opts: MailOptions = serde_json::from_value(json!({
            "email_domain": "example.com",
            "option": "restrictspf",
            "value": "reject"
        }))
        .unwrap();
        assert_eq!(opts.option, MailOption::RestrictSpf);
        assert_eq!(
            opts.build().unwrap().args(),
            ["--json", "mail", "options", "example.com", "restrictspf", "reject"]
        );

        let bad: Result<MailOptions, _> = serde_json::from_value(json!({
            "email_domain": "example.com",
            "option": "greylisting",
            "value": "on"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_list_with_and_without_domain() {
        assert_eq!(list(MailListQuery::default()).args(), ["--json", "mail", "list"]);
        let query = MailListQuery {
            email_domain: Some("example.com".into()),
        };
        assert_eq!(list(query).args(), ["--json", "mail", "list", "example.com"]);
    }

    #[test]
    fn test_dkim_dns_print_flag() {
        assert_eq!(
            dkim_dns("example.com".into(), DkimDnsQuery { print_record: true }).args(),
            ["--json", "mail", "dkim", "dns", "example.com", "--print"]
        );
        assert_eq!(
            dkim_dns("example.com".into(), DkimDnsQuery::default()).args(),
            ["--json", "mail", "dkim", "dns", "example.com"]
        );
    }

    #[test]
    fn test_whitelist_and_alias() {
        let alias: MailAliasAdd = serde_json::from_value(json!({
            "email_from": "info@example.com",
            "email_to": "bob@example.com"
        }))
        .unwrap();
        assert_eq!(
            alias.build().unwrap().args(),
            ["--json", "mail", "alias", "add", "info@example.com", "bob@example.com"]
        );
        assert_eq!(
            whitelist_add(MailDomain {
                domain: "partner.org".into()
            })
            .args(),
            ["--json", "mail", "whitelist", "add", "partner.org"]
        );
        assert_eq!(whitelist_list().args(), ["--json", "mail", "whitelist", "list"]);
    }
}
