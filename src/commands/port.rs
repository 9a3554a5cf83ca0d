//! `devil port ...`

use serde::Deserialize;

use super::{ArgumentError, BuildCommand, Command};

arg_enum! {
    pub enum PortType {
        Tcp => "tcp",
        Udp => "udp",
    }
}

/// Which port to reserve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSelection {
    Random,
    Number(u16),
}

impl PortSelection {
    fn token(self) -> String {
        match self {
            PortSelection::Random => "random".to_string(),
            PortSelection::Number(port) => port.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortAdd {
    #[serde(rename = "type")]
    pub port_type: PortType,
    pub port: Option<u16>,
    #[serde(default)]
    pub random: bool,
    pub description: Option<String>,
}

impl PortAdd {
    pub fn selection(&self) -> Result<PortSelection, ArgumentError> {
        match (self.port, self.random) {
            (Some(_), true) => Err(ArgumentError::invalid(
                "Provide either random or port, not both",
            )),
            (Some(port), false) => Ok(PortSelection::Number(port)),
            (None, true) => Ok(PortSelection::Random),
            (None, false) => Err(ArgumentError::invalid("Provide port or set random=true")),
        }
    }
}

impl BuildCommand for PortAdd {
    fn build(self) -> Result<Command, ArgumentError> {
        let selection = self.selection()?;
        Ok(Command::new(["port", "add"])
            .arg(self.port_type)
            .arg(selection.token())
            .opt_arg(self.description))
    }
}

pub fn del(port_type: PortType, port: u16) -> Command {
    Command::new(["port", "del"])
        .arg(port_type)
        .arg(port.to_string())
}

pub fn list() -> Command {
    Command::new(["port", "list"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn add(body: serde_json::Value) -> PortAdd {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_random_port() {
        let cmd = add(json!({"type": "tcp", "random": true, "description": "node app"}))
            .build()
            .unwrap();
        assert_eq!(cmd.args(), ["--json", "port", "add", "tcp", "random", "node app"]);
    }

    #[test]
    fn test_explicit_port() {
        let cmd = add(json!({"type": "udp", "port": 40123})).build().unwrap();
        assert_eq!(cmd.args(), ["--json", "port", "add", "udp", "40123"]);
    }

    #[test]
    fn test_port_and_random_are_exclusive() {
        let err = add(json!({"type": "tcp", "port": 40123, "random": true}))
            .build()
            .unwrap_err();
        assert_eq!(err, ArgumentError::invalid("Provide either random or port, not both"));

        let err = add(json!({"type": "tcp"})).build().unwrap_err();
        assert_eq!(err, ArgumentError::invalid("Provide port or set random=true"));
    }

    #[test]
    fn test_out_of_range_port_fails_to_deserialize() {
        let result: Result<PortAdd, _> = serde_json::from_value(json!({"type": "tcp", "port": 70000}));
        assert!(result.is_err());
    }

    #[test]
    fn test_del_and_list() {
        assert_eq!(del(PortType::Udp, 40123).args(), ["--json", "port", "del", "udp", "40123"]);
        assert_eq!(list().args(), ["--json", "port", "list"]);
    }
}
