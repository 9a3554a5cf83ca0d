//! `devil ssl ...`

use serde::Deserialize;

use super::{ArgumentError, BuildCommand, Command};

/// Where a website certificate comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateSource {
    /// Issue through Let's Encrypt for one domain
    LetsEncrypt { domain: String },
    /// Uploaded certificate and key files, optionally bound to an SNI domain
    Files {
        cert_file: String,
        key_file: String,
        domain: Option<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct SslWwwAdd {
    pub ssl_ip: String,
    pub ssl_cert_file: Option<String>,
    pub ssl_key_file: Option<String>,
    pub domain: Option<String>,
    #[serde(default)]
    pub le: bool,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl SslWwwAdd {
    pub fn source(&self) -> Result<CertificateSource, ArgumentError> {
        let domain = non_empty(self.domain.clone());
        if self.le {
            let domain =
                domain.ok_or_else(|| ArgumentError::invalid("domain required for Let's Encrypt"))?;
            return Ok(CertificateSource::LetsEncrypt { domain });
        }
        match (
            non_empty(self.ssl_cert_file.clone()),
            non_empty(self.ssl_key_file.clone()),
        ) {
            (Some(cert_file), Some(key_file)) => Ok(CertificateSource::Files {
                cert_file,
                key_file,
                domain,
            }),
            _ => Err(ArgumentError::invalid(
                "ssl_cert_file and ssl_key_file required unless le=true",
            )),
        }
    }
}

impl BuildCommand for SslWwwAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        let source = self.source()?;
        let cmd = Command::new(["ssl", "www", "add"]).arg(self.ssl_ip);
        Ok(match source {
            CertificateSource::LetsEncrypt { domain } => cmd.arg("le").arg("le").arg(domain),
            CertificateSource::Files {
                cert_file,
                key_file,
                domain,
            } => cmd.arg(cert_file).arg(key_file).opt_arg(domain),
        })
    }
}

/// Fetching a certificate requires the account password
#[derive(Debug, Clone, Deserialize)]
pub struct SslWwwGet {
    pub ssl_ip: String,
    pub password: String,
    pub domain: Option<String>,
}

impl BuildCommand for SslWwwGet {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["ssl", "www", "get"])
            .arg(self.ssl_ip)
            .opt_arg(self.domain)
            .arg(self.password))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SslWwwDelQuery {
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SslMailAdd {
    pub ssl_ip: String,
    pub ssl_cert_file: String,
    pub ssl_key_file: String,
}

impl BuildCommand for SslMailAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["ssl", "mail", "add"])
            .arg(self.ssl_ip)
            .arg(self.ssl_cert_file)
            .arg(self.ssl_key_file))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SslMailGet {
    pub ssl_ip: String,
    pub password: String,
}

impl BuildCommand for SslMailGet {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["ssl", "mail", "get"])
            .arg(self.ssl_ip)
            .arg(self.password))
    }
}

pub fn www_del(ssl_ip: String, query: SslWwwDelQuery) -> Command {
    Command::new(["ssl", "www", "del"])
        .arg(ssl_ip)
        .opt_arg(query.domain)
}

pub fn www_list() -> Command {
    Command::new(["ssl", "www", "list"])
}

pub fn mail_del(ssl_ip: String) -> Command {
    Command::new(["ssl", "mail", "del"]).arg(ssl_ip)
}

pub fn mail_list() -> Command {
    Command::new(["ssl", "mail", "list"])
}
