use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use serde_json::Value;

use crate::backend::SocketClient;
use crate::commands::JSON_FLAG;
use crate::config::BackendConfig;

#[derive(Debug, Parser)]
#[command(name = "devilctl")]
#[command(about = "Send one command to the devil daemon socket and print the reply")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Daemon socket path [default: $DEVIL_SOCKET_PATH or /var/run/devil2.sock]")]
    pub socket: Option<PathBuf>,

    #[arg(long, value_name = "SECS", help = "Connect and reply timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Print the reply on a single line")]
    pub compact: bool,

    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Command words, e.g. `info limits`"
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Socket settings: flags win over the environment
    pub fn backend_config(&self) -> BackendConfig {
        let mut config = BackendConfig::from_env();
        if let Some(path) = &self.socket {
            config.socket_path = path.clone();
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = secs;
        }
        config
    }

    /// Full argument list sent to the daemon, `--json` first
    pub fn command_args(&self) -> Vec<String> {
        std::iter::once(JSON_FLAG.to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.backend_config();
    let client = SocketClient::new(config.socket_path.clone(), Duration::from_secs(config.timeout_secs));

    tracing::debug!(socket = %config.socket_path.display(), "Sending command");
    let reply = client.execute(&cli.command_args()).await?;

    let reply = Value::Object(reply);
    if cli.compact {
        println!("{}", serde_json::to_string(&reply)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_passes_hyphen_words_through() {
        let cli = Cli::parse_from(["devilctl", "--socket", "/tmp/d.sock", "www", "del", "example.com", "--remove"]);
        assert_eq!(cli.socket, Some(PathBuf::from("/tmp/d.sock")));
        assert_eq!(
            cli.command_args(),
            ["--json", "www", "del", "example.com", "--remove"]
        );
    }

    #[test]
    fn test_json_flag_leads() {
        let cli = Cli::parse_from(["devilctl", "info", "limits"]);
        assert_eq!(cli.command_args(), ["--json", "info", "limits"]);
    }

    #[test]
    fn test_flags_override_socket_settings() {
        let cli = Cli::parse_from(["devilctl", "--socket", "/tmp/x.sock", "--timeout", "3", "info", "account"]);
        let config = cli.backend_config();
        assert_eq!(config.socket_path, PathBuf::from("/tmp/x.sock"));
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_command_words_required() {
        assert!(Cli::try_parse_from(["devilctl"]).is_err());
    }
}
