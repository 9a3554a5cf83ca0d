//! Argument-list builders for the devil command grammar.
//!
//! Each submodule owns the request bodies for one command group and turns a
//! validated request into a [`Command`], the exact ordered token list the
//! daemon expects.

use thiserror::Error;

/// Declares a closed set of string tokens accepted by the daemon.
macro_rules! arg_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
        $vis enum $name {
            $(#[serde(rename = $value)] $variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Exact-match lookup of a daemon token
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }
    };
}

pub mod dns;
pub mod ftp;
pub mod info;
pub mod mail;
pub mod mongo;
pub mod mysql;
pub mod pgsql;
pub mod port;
pub mod repo;
pub mod ssl;
pub mod vhost;
pub mod www;

/// Marker token asking the daemon for structured output; always first
pub const JSON_FLAG: &str = "--json";

/// One daemon invocation: an ordered list of string tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    args: Vec<String>,
}

impl Command {
    /// Start a command with the given leading words, e.g. `["dns", "add"]`.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = vec![JSON_FLAG.to_string()];
        args.extend(words.into_iter().map(Into::into));
        Self { args }
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append `value` when present and non-empty
    pub fn opt_arg<S: Into<String>>(self, value: Option<S>) -> Self {
        match value.map(Into::into) {
            Some(v) if !v.is_empty() => self.arg(v),
            _ => self,
        }
    }

    /// Append `flag` when `enabled`
    pub fn flag(self, flag: &str, enabled: bool) -> Self {
        if enabled {
            self.arg(flag)
        } else {
            self
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}

/// Request bodies that translate into a daemon command
pub trait BuildCommand {
    fn build(self) -> Result<Command, ArgumentError>;
}

/// Caller-supplied fields that cannot form a valid command
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Missing or mutually exclusive fields for the chosen variant
    #[error("{0}")]
    Invalid(String),

    /// A field value outside what the daemon accepts
    #[error("{field}: {message}")]
    Rejected { field: &'static str, message: String },
}

impl ArgumentError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    pub fn rejected(field: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected {
            field,
            message: message.into(),
        }
    }
}
