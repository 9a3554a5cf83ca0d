//! `devil www ...`

use serde::Deserialize;

use super::{ArgumentError, BuildCommand, Command};

arg_enum! {
    pub enum WwwType {
        Php => "php",
        Python => "python",
        Ruby => "ruby",
        Nodejs => "nodejs",
        Proxy => "proxy",
        Pointer => "pointer",
    }
}

impl WwwType {
    /// Application types served through Passenger
    pub fn is_passenger(self) -> bool {
        matches!(self, WwwType::Python | WwwType::Ruby | WwwType::Nodejs)
    }
}

arg_enum! {
    pub enum WwwEnvironment {
        Production => "production",
        Staging => "staging",
        Development => "development",
        Test => "test",
    }
}

arg_enum! {
    pub enum WwwOption {
        Gzip => "gzip",
        SslOnly => "sslonly",
        Plnet => "plnet",
        PhpEval => "php_eval",
        PhpExec => "php_exec",
        PhpOpenBaseDir => "php_openbasedir",
        Cache => "cache",
        CacheCookie => "cache_cookie",
        CacheDebug => "cache_debug",
        Waf => "waf",
        Blacklist => "blacklist",
        StatsAnonymize => "stats_anonymize",
        StatsExclude => "stats_exclude",
        Processes => "processes",
        TlsMin => "tls_min",
    }
}

/// The kind of website `www add` creates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WwwSite {
    Pointer { target: String },
    Proxy { target: String, port: u16 },
    Passenger {
        runtime: WwwType,
        binary: String,
        environment: WwwEnvironment,
    },
    Typed(WwwType),
    Php,
}

impl WwwSite {
    fn append_to(self, cmd: Command) -> Command {
        match self {
            WwwSite::Pointer { target } => cmd.arg(WwwType::Pointer).arg(target),
            WwwSite::Proxy { target, port } => {
                cmd.arg(WwwType::Proxy).arg(target).arg(port.to_string())
            }
            WwwSite::Passenger {
                runtime,
                binary,
                environment,
            } => cmd.arg(runtime).arg(binary).arg(environment),
            WwwSite::Typed(www_type) => cmd.arg(www_type),
            WwwSite::Php => cmd.arg(WwwType::Php),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WwwAdd {
    pub www_domain: String,
    pub www_type: Option<WwwType>,
    pub pointer_target: Option<String>,
    pub proxy_target: Option<String>,
    pub proxy_port: Option<u16>,
    pub passenger_binary: Option<String>,
    pub www_environment: Option<WwwEnvironment>,
}

impl WwwAdd {
    /// Pick the site variant from whichever fields are filled in. A pointer
    /// target wins over a proxy, which wins over a Passenger app; otherwise
    /// the bare type is passed through, defaulting to PHP.
    pub fn site(&self) -> WwwSite {
        let filled = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());

        if let Some(target) = filled(&self.pointer_target) {
            return WwwSite::Pointer { target };
        }
        if let (Some(target), Some(port)) = (filled(&self.proxy_target), self.proxy_port) {
            return WwwSite::Proxy { target, port };
        }
        if let (Some(runtime), Some(binary), Some(environment)) =
            (self.www_type, filled(&self.passenger_binary), self.www_environment)
        {
            if runtime.is_passenger() {
                return WwwSite::Passenger {
                    runtime,
                    binary,
                    environment,
                };
            }
        }
        match self.www_type {
            Some(www_type) => WwwSite::Typed(www_type),
            None => WwwSite::Php,
        }
    }
}

impl BuildCommand for WwwAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        let site = self.site();
        let cmd = Command::new(["www", "add"]).arg(self.www_domain);
        Ok(site.append_to(cmd))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WwwDelQuery {
    #[serde(default)]
    pub remove: bool,
}

/// `www options DOMAIN OPTION VALUE`; value syntax depends on the option
#[derive(Debug, Clone, Deserialize)]
pub struct WwwOptions {
    pub www_domain: String,
    pub www_option: WwwOption,
    pub value: String,
}

impl BuildCommand for WwwOptions {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["www", "options"])
            .arg(self.www_domain)
            .arg(self.www_option)
            .arg(self.value))
    }
}

/// Body shared by stats account add and passwd
#[derive(Debug, Clone, Deserialize)]
pub struct StatsAccount {
    pub user_name: String,
    pub password: Option<String>,
}

impl StatsAccount {
    pub fn add(self) -> Command {
        self.command("add")
    }

    pub fn passwd(self) -> Command {
        self.command("passwd")
    }

    fn command(self, action: &str) -> Command {
        Command::new(["www", "stats", "account", action])
            .arg(self.user_name)
            .opt_arg(self.password)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsAccessAdd {
    pub www_domain: String,
    pub user_name: String,
}

impl BuildCommand for StatsAccessAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(stats_access("add", self.www_domain, self.user_name))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsDomainAdd {
    pub www_domain: String,
}

pub fn del(www_domain: String, query: WwwDelQuery) -> Command {
    Command::new(["www", "del"])
        .arg(www_domain)
        .flag("--remove", query.remove)
}

/// Restart a Passenger application
pub fn restart(www_domain: String) -> Command {
    Command::new(["www", "restart"]).arg(www_domain)
}

pub fn list() -> Command {
    Command::new(["www", "list"])
}

pub fn stats_account_del(user_name: String) -> Command {
    Command::new(["www", "stats", "account", "del"]).arg(user_name)
}

fn stats_access(action: &str, www_domain: String, user_name: String) -> Command {
    Command::new(["www", "stats", "access", action])
        .arg(www_domain)
        .arg(user_name)
}

pub fn stats_access_del(www_domain: String, user_name: String) -> Command {
    stats_access("del", www_domain, user_name)
}

pub fn stats_domain_add(body: StatsDomainAdd) -> Command {
    Command::new(["www", "stats", "domain", "add"]).arg(body.www_domain)
}

pub fn stats_domain_del(www_domain: String) -> Command {
    Command::new(["www", "stats", "domain", "del"]).arg(www_domain)
}

pub fn stats_list() -> Command {
    Command::new(["www", "stats", "list"])
}
