//! SRV record resolution.
//!
//! Mail services advertise where they live through [RFC-6186][RFC-6186] SRV records, e.g.:
//!
//! ```text
//! _imaps._tcp.marshland.ovh.       3600 IN SRV 0 1 993 hermes.marshland.ovh.
//! _submission._tcp.marshland.ovh.  3600 IN SRV 0 1 465 hermes.marshland.ovh.
//! ```
//!
//! [`resolve`] turns a (service, protocol, domain) triple into the [`ServiceEndpoint`] of the
//! first record returned for it. The lookup itself is delegated to a [`SrvLookup`]
//! implementation. Two are provided, [`system::SystemSrvLookup`] which queries DNS and
//! [`memory::InMemorySrvLookup`] which answers from a static table.
//!
//! [RFC-6186]: https://www.rfc-editor.org/rfc/rfc6186

use crate::error::Error;
use std::str::FromStr;
use std::sync::Arc;
use trust_dns_proto::rr::rdata::SRV;
use trust_dns_proto::rr::Name;

pub mod memory;
pub mod system;

#[allow(clippy::module_name_repetitions)]
pub use memory::InMemorySrvLookup;
#[allow(clippy::module_name_repetitions)]
pub use system::SystemSrvLookup;

/// `DynSrvLookup` is a type alias for a [`SrvLookup`] shared between concurrent requests.
#[allow(clippy::module_name_repetitions)]
pub type DynSrvLookup = Arc<dyn SrvLookup + Send + Sync>;

/// An async trait describing the DNS capability needed to answer SRV queries.
#[async_trait::async_trait]
pub trait SrvLookup {
    /// Return the SRV records for the absolute query name, in the order the underlying source
    /// returned them.
    ///
    /// An empty answer is reported as [`Error::NoRecords`]. A non-existent name (NXDOMAIN) or a
    /// failed query is reported as [`Error::LookupFailed`].
    async fn lookup_srv(&self, name: &Name) -> Result<Vec<SRV>, Error>;
}

/// A resolved service location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceEndpoint {
    pub hostname: String,
    pub port: u16,
}

const SRV_TRANSPORT_TCP: &str = "tcp";
const MAX_LABEL_LEN: usize = 63;

/// Resolve the first SRV record for `_{service}._{protocol}.{domain}`.
///
/// Records are not re-sorted by priority or weight, the first one in the answer wins. The trailing
/// root label is stripped from its target.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLabel`] if `service` or `protocol` isn't a letter/digit/hyphen DNS
/// label.
///
/// Returns [`Error::NoRecords`] if the lookup yields no records. Transport protocols other than
/// `tcp` never carry mail service records and yield [`Error::NoRecords`] without a query.
///
/// Returns [`Error::InvalidName`] if the query name can't be parsed, or [`Error::LookupFailed`]
/// if the resolver couldn't complete the query.
pub async fn resolve(
    lookup: &(dyn SrvLookup + Send + Sync),
    service: &str,
    protocol: &str,
    domain: &str,
) -> Result<ServiceEndpoint, Error> {
    for label in [service, protocol] {
        if !valid_label(label) {
            return Err(Error::UnsupportedLabel(label.to_string()));
        }
    }

    let domain = domain.trim_end_matches('.');
    let query = format!("_{service}._{protocol}.{domain}.");
    if !protocol.eq_ignore_ascii_case(SRV_TRANSPORT_TCP) {
        tracing::debug!("{query}: skipping lookup for non-tcp transport");
        return Err(Error::NoRecords(query));
    }

    let name = Name::from_str(&query)?;
    let records = lookup.lookup_srv(&name).await?;
    tracing::debug!("{query}: discovered {} SRV record(s)", records.len());

    let record = records
        .first()
        .ok_or_else(|| Error::NoRecords(query.clone()))?;
    let endpoint = ServiceEndpoint {
        hostname: record.target().to_ascii().trim_end_matches('.').to_string(),
        port: record.port(),
    };
    tracing::debug!("{query}: using {}:{}", endpoint.hostname, endpoint.port);
    Ok(endpoint)
}

fn valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    fn marshland() -> InMemorySrvLookup {
        InMemorySrvLookup::default()
            .with_record(
                name("_imaps._tcp.marshland.ovh."),
                SRV::new(0, 1, 993, name("hermes.marshland.ovh.")),
            )
            .with_record(
                name("_submission._tcp.marshland.ovh."),
                SRV::new(0, 1, 465, name("hermes.marshland.ovh.")),
            )
    }

    #[tokio::test]
    async fn resolves_first_record_without_root_label() {
        let endpoint = resolve(&marshland(), "imaps", "tcp", "marshland.ovh")
            .await
            .unwrap();
        assert_eq!(
            endpoint,
            ServiceEndpoint {
                hostname: "hermes.marshland.ovh".to_string(),
                port: 993,
            }
        );
    }

    #[tokio::test]
    async fn keeps_answer_order() {
        // The lower priority record comes second and must not be preferred.
        let lookup = InMemorySrvLookup::default()
            .with_record(
                name("_imaps._tcp.example.com."),
                SRV::new(20, 0, 993, name("backup.example.com.")),
            )
            .with_record(
                name("_imaps._tcp.example.com."),
                SRV::new(10, 0, 9993, name("primary.example.com.")),
            );
        let endpoint = resolve(&lookup, "imaps", "tcp", "example.com.")
            .await
            .unwrap();
        assert_eq!(endpoint.hostname, "backup.example.com");
        assert_eq!(endpoint.port, 993);
    }

    #[tokio::test]
    async fn keeps_punycode_target() {
        let lookup = InMemorySrvLookup::default().with_record(
            name("_imaps._tcp.example.com."),
            SRV::new(0, 0, 993, name("xn--bcher-kva.example.")),
        );
        let endpoint = resolve(&lookup, "imaps", "tcp", "example.com")
            .await
            .unwrap();
        assert_eq!(endpoint.hostname, "xn--bcher-kva.example");
    }

    #[tokio::test]
    async fn missing_records() {
        let err = resolve(&marshland(), "imaps", "tcp", "example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NoRecords(q) if q == "_imaps._tcp.example.com."));
    }

    #[tokio::test]
    async fn non_tcp_transport_is_empty() {
        let err = resolve(&marshland(), "imaps", "udp", "marshland.ovh")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NoRecords(_)));
        assert!(err.is_lookup());
    }

    #[tokio::test]
    async fn rejects_bad_labels() {
        let cases = [
            ("", "tcp"),
            ("imaps", "_tcp"),
            ("-imaps", "tcp"),
            ("im.aps", "tcp"),
        ];
        for (service, protocol) in cases {
            let err = resolve(&marshland(), service, protocol, "marshland.ovh")
                .await
                .unwrap_err();
            assert!(
                matches!(err, Error::UnsupportedLabel(_)),
                "{service:?}/{protocol:?} gave {err}"
            );
        }
    }

    #[tokio::test]
    async fn invalid_domain() {
        let domain = format!("{}.ovh", "a".repeat(64));
        let err = resolve(&marshland(), "imaps", "tcp", &domain)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidName(_)));
    }
}
