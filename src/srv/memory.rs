use crate::error::Error;
use crate::srv::SrvLookup;
use std::collections::HashMap;
use trust_dns_proto::rr::rdata::SRV;
use trust_dns_proto::rr::Name;

/// A [`SrvLookup`] answering from a fixed table of records. Names are matched
/// case-insensitively and records are returned in insertion order.
#[derive(Default, Debug, Clone)]
pub struct InMemorySrvLookup {
    srv_records: HashMap<Name, Vec<SRV>>,
}

impl InMemorySrvLookup {
    /// Append an SRV record for the given query name.
    pub fn add_srv(&mut self, name: Name, record: SRV) {
        self.srv_records
            .entry(name.to_lowercase())
            .or_default()
            .push(record);
    }

    #[must_use]
    pub fn with_record(mut self, name: Name, record: SRV) -> Self {
        self.add_srv(name, record);
        self
    }
}

#[async_trait::async_trait]
impl SrvLookup for InMemorySrvLookup {
    async fn lookup_srv(&self, name: &Name) -> Result<Vec<SRV>, Error> {
        match self.srv_records.get(&name.to_lowercase()) {
            Some(records) if !records.is_empty() => Ok(records.clone()),
            _ => Err(Error::NoRecords(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[tokio::test]
    async fn case_insensitive_names() {
        let target = Name::from_str("mx.example.com.").unwrap();
        let lookup = InMemorySrvLookup::default().with_record(
            Name::from_str("_IMAPS._tcp.Example.com.").unwrap(),
            SRV::new(0, 0, 993, target.clone()),
        );
        let records = lookup
            .lookup_srv(&Name::from_str("_imaps._tcp.example.com.").unwrap())
            .await
            .unwrap();
        assert_eq!(records, vec![SRV::new(0, 0, 993, target)]);
    }
}
