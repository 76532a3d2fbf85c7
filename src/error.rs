//! Error types.

use trust_dns_proto::error::ProtoError;
use trust_dns_resolver::error::ResolveError;

/// Error enumerates the possible mailconf error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when an SRV query produced no usable record: an empty answer, or a transport
    /// protocol label other than `tcp`.
    #[error("no SRV records found for \"{0}\"")]
    NoRecords(String),

    /// Returned when the service or transport protocol label given to
    /// [`resolve`][crate::srv::resolve] isn't a valid DNS label.
    #[error("unsupported SRV service or protocol label \"{0}\"")]
    UnsupportedLabel(String),

    /// Returned when the resolver fails to answer an SRV query, e.g. on a timeout, an
    /// unreachable name server, or an NXDOMAIN response for a domain that isn't served.
    #[error("SRV lookup for \"{name}\" failed: {source}")]
    LookupFailed {
        name: String,
        #[source]
        source: ResolveError,
    },

    /// Returned when the SRV query name for a domain isn't a valid DNS name.
    #[error("invalid DNS name: {0}")]
    InvalidName(#[from] ProtoError),

    /// Returned when a [`ConfigDocument`][crate::autoconfig::ConfigDocument] is structurally
    /// invalid and can't be serialized to the autoconfig schema.
    #[error("malformed autoconfig document: {0}")]
    MalformedDocument(&'static str),

    /// Returned when writing the autoconfig XML fails.
    #[error("unable to write autoconfig XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Returned when the DNS resolver can't be constructed, e.g. because the system resolver
    /// configuration is unreadable.
    #[error("unable to create DNS resolver: {0}")]
    Resolver(#[from] ResolveError),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when [trying to load a `Config`][crate::config::Config::try_from_file] fails
    /// due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}

impl Error {
    /// True for errors raised while resolving SRV records.
    #[must_use]
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Error::NoRecords(_)
                | Error::UnsupportedLabel(_)
                | Error::LookupFailed { .. }
                | Error::InvalidName(_)
        )
    }

    /// True for errors raised while serializing an autoconfig document.
    #[must_use]
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::MalformedDocument(_) | Error::Xml(_))
    }
}
