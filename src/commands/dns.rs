//! `devil dns ...`

use serde::Deserialize;

use super::{ArgumentError, BuildCommand, Command};

arg_enum! {
    pub enum DnsRecordType {
        A => "A",
        Aaaa => "AAAA",
        Cname => "CNAME",
        Mx => "MX",
        Ns => "NS",
        Srv => "SRV",
        Txt => "TXT",
        Caa => "CAA",
    }
}

/// `dns add DOMAIN [TEMPLATE]`
#[derive(Debug, Clone, Deserialize)]
pub struct DnsAddZone {
    pub dns_domain: String,
    pub dns_template: Option<String>,
}

impl BuildCommand for DnsAddZone {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["dns", "add"])
            .arg(self.dns_domain)
            .opt_arg(self.dns_template))
    }
}

/// `dns add DOMAIN RECORD TYPE ... [TTL]`
#[derive(Debug, Clone, Deserialize)]
pub struct DnsAddRecord {
    pub dns_domain: String,
    pub dns_record: String,
    pub dns_record_type: DnsRecordType,
    pub dns_target: String,
    pub ttl: Option<i64>,
    pub caa_tag: Option<String>,
    pub dns_prio: Option<i64>,
    pub dns_weight: Option<i64>,
}

/// Type-specific tail of a record, validated against the record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Caa { tag: String, target: String },
    Srv { prio: i64, weight: Option<i64>, target: String },
    Mx { prio: i64, target: String },
    Plain { target: String },
}

impl RecordData {
    fn append_to(self, cmd: Command) -> Command {
        match self {
            RecordData::Caa { tag, target } => cmd.arg(tag).arg(target),
            RecordData::Srv { prio, weight, target } => cmd
                .arg(prio.to_string())
                .opt_arg(weight.map(|w| w.to_string()))
                .arg(target),
            RecordData::Mx { prio, target } => cmd.arg(prio.to_string()).arg(target),
            RecordData::Plain { target } => cmd.arg(target),
        }
    }
}

impl DnsAddRecord {
    /// Pick the argument shape for this record type, rejecting fields the
    /// type does not take.
    pub fn record_data(&self) -> Result<RecordData, ArgumentError> {
        let target = self.dns_target.clone();
        match self.dns_record_type {
            DnsRecordType::Caa => {
                let tag = self
                    .caa_tag
                    .clone()
                    .ok_or_else(|| ArgumentError::invalid("caa_tag is required for CAA records"))?;
                if self.dns_prio.is_some() || self.dns_weight.is_some() {
                    return Err(ArgumentError::invalid(
                        "dns_prio/dns_weight not applicable to CAA",
                    ));
                }
                Ok(RecordData::Caa { tag, target })
            }
            DnsRecordType::Srv => {
                let prio = self
                    .dns_prio
                    .ok_or_else(|| ArgumentError::invalid("dns_prio is required for SRV records"))?;
                if self.caa_tag.is_some() {
                    return Err(ArgumentError::invalid("caa_tag not applicable to SRV"));
                }
                Ok(RecordData::Srv {
                    prio,
                    weight: self.dns_weight,
                    target,
                })
            }
            DnsRecordType::Mx => {
                let prio = self
                    .dns_prio
                    .ok_or_else(|| ArgumentError::invalid("dns_prio is required for MX records"))?;
                if self.dns_weight.is_some() || self.caa_tag.is_some() {
                    return Err(ArgumentError::invalid(
                        "dns_weight/caa_tag not applicable to MX",
                    ));
                }
                Ok(RecordData::Mx { prio, target })
            }
            DnsRecordType::A
            | DnsRecordType::Aaaa
            | DnsRecordType::Cname
            | DnsRecordType::Ns
            | DnsRecordType::Txt => {
                if self.dns_prio.is_some() || self.dns_weight.is_some() || self.caa_tag.is_some() {
                    return Err(ArgumentError::invalid(
                        "dns_prio/dns_weight/caa_tag not applicable to this record type",
                    ));
                }
                Ok(RecordData::Plain { target })
            }
        }
    }
}

impl BuildCommand for DnsAddRecord {
    fn build(self) -> Result<Command, ArgumentError> {
        let data = self.record_data()?;
        let cmd = Command::new(["dns", "add"])
            .arg(self.dns_domain)
            .arg(self.dns_record)
            .arg(self.dns_record_type);
        Ok(data
            .append_to(cmd)
            .opt_arg(self.ttl.map(|ttl| ttl.to_string())))
    }
}

/// `dns del DOMAIN [RECORD_ID]`
#[derive(Debug, Clone, Deserialize)]
pub struct DnsDel {
    pub dns_domain: String,
    pub dns_record_id: Option<i64>,
}

impl BuildCommand for DnsDel {
    fn build(self) -> Result<Command, ArgumentError> {
        Ok(Command::new(["dns", "del"])
            .arg(self.dns_domain)
            .opt_arg(self.dns_record_id.map(|id| id.to_string())))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DnsListQuery {
    pub dns_domain: Option<String>,
}

/// `dns list [DOMAIN]`
pub fn list(query: DnsListQuery) -> Command {
    Command::new(["dns", "list"]).opt_arg(query.dns_domain)
}

/// `dns templates`
pub fn templates() -> Command {
    Command::new(["dns", "templates"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(body: serde_json::Value) -> DnsAddRecord {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_add_zone_with_and_without_template() {
        let zone: DnsAddZone = serde_json::from_value(json!({"dns_domain": "example.com"})).unwrap();
        assert_eq!(zone.build().unwrap().args(), ["--json", "dns", "add", "example.com"]);

        let zone: DnsAddZone =
            serde_json::from_value(json!({"dns_domain": "example.com", "dns_template": "mail"})).unwrap();
        assert_eq!(
            zone.build().unwrap().args(),
            ["--json", "dns", "add", "example.com", "mail"]
        );
    }

    #[test]
    fn test_plain_record_with_ttl() {
        let cmd = record(json!({
            "dns_domain": "example.com",
            "dns_record": "www",
            "dns_record_type": "A",
            "dns_target": "192.0.2.1",
            "ttl": 3600
        }))
        .build()
        .unwrap();
        assert_eq!(
            cmd.args(),
            ["--json", "dns", "add", "example.com", "www", "A", "192.0.2.1", "3600"]
        );
    }

    #[test]
    fn test_mx_record_requires_prio() {
        let body = json!({
            "dns_domain": "example.com",
            "dns_record": "@",
            "dns_record_type": "MX",
            "dns_target": "mx.example.com"
        });
        let err = record(body.clone()).build().unwrap_err();
        assert_eq!(err, ArgumentError::invalid("dns_prio is required for MX records"));

        let mut with_prio = body;
        with_prio["dns_prio"] = json!(10);
        assert_eq!(
            record(with_prio).build().unwrap().args(),
            ["--json", "dns", "add", "example.com", "@", "MX", "10", "mx.example.com"]
        );
    }

    #[test]
    fn test_srv_record_optional_weight() {
        let base = json!({
            "dns_domain": "example.com",
            "dns_record": "_sip._tcp",
            "dns_record_type": "SRV",
            "dns_target": "5060 sip.example.com",
            "dns_prio": 10
        });
        assert_eq!(
            record(base.clone()).record_data().unwrap(),
            RecordData::Srv {
                prio: 10,
                weight: None,
                target: "5060 sip.example.com".to_string()
            }
        );

        let mut weighted = base;
        weighted["dns_weight"] = json!(20);
        assert_eq!(
            record(weighted).build().unwrap().args(),
            [
                "--json",
                "dns",
                "add",
                "example.com",
                "_sip._tcp",
                "SRV",
                "10",
                "20",
                "5060 sip.example.com"
            ]
        );
    }

    #[test]
    fn test_caa_record_shape() {
        let body = json!({
            "dns_domain": "example.com",
            "dns_record": "@",
            "dns_record_type": "CAA",
            "dns_target": "letsencrypt.org",
            "caa_tag": "issue"
        });
        assert_eq!(
            record(body.clone()).build().unwrap().args(),
            ["--json", "dns", "add", "example.com", "@", "CAA", "issue", "letsencrypt.org"]
        );

        let mut with_prio = body;
        with_prio["dns_prio"] = json!(1);
        assert!(matches!(record(with_prio).build(), Err(ArgumentError::Invalid(_))));
    }

    #[test]
    fn test_plain_record_rejects_extra_fields() {
        let err = record(json!({
            "dns_domain": "example.com",
            "dns_record": "www",
            "dns_record_type": "CNAME",
            "dns_target": "example.com",
            "dns_weight": 5
        }))
        .build()
        .unwrap_err();
        assert!(matches!(err, ArgumentError::Invalid(ref m) if m.contains("not applicable")));
    }

    #[test]
    fn test_unknown_record_type_fails_to_deserialize() {
        let result: Result<DnsAddRecord, _> = serde_json::from_value(json!({
            "dns_domain": "example.com",
            "dns_record": "www",
            "dns_record_type": "PTR",
            "dns_target": "x"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_del_and_list() {
        let del: DnsDel =
            serde_json::from_value(json!({"dns_domain": "example.com", "dns_record_id": 42})).unwrap();
        assert_eq!(del.build().unwrap().args(), ["--json", "dns", "del", "example.com", "42"]);

        assert_eq!(list(DnsListQuery::default()).args(), ["--json", "dns", "list"]);
        assert_eq!(templates().args(), ["--json", "dns", "templates"]);
    }
}
