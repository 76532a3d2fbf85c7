//! A DNS-backed implementation of the [`SrvLookup`][super::SrvLookup] trait.
//!
//! Timeouts and attempts follow the [`ResolverOpts`] defaults, nothing is retried or cached on
//! top of what the resolver itself does.
use crate::error::Error;
use crate::srv::SrvLookup;
use std::net::IpAddr;
use trust_dns_proto::op::ResponseCode;
use trust_dns_proto::rr::rdata::SRV;
use trust_dns_proto::rr::Name;
use trust_dns_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::TokioAsyncResolver;

const DNS_PORT: u16 = 53;

/// Answers SRV queries using a [`TokioAsyncResolver`].
#[allow(clippy::module_name_repetitions)]
pub struct SystemSrvLookup {
    resolver: TokioAsyncResolver,
}

impl SystemSrvLookup {
    /// Create a lookup using the host's resolver configuration (e.g. `/etc/resolv.conf`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolver`] if the system configuration can't be read.
    pub fn from_system_conf() -> Result<Self, Error> {
        Ok(Self {
            resolver: TokioAsyncResolver::tokio_from_system_conf()?,
        })
    }

    /// Create a lookup querying the given name servers on port 53.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolver`] if the resolver can't be constructed.
    pub fn from_nameservers(nameservers: &[IpAddr]) -> Result<Self, Error> {
        let group = NameServerConfigGroup::from_ips_clear(nameservers, DNS_PORT, true);
        let config = ResolverConfig::from_parts(None, vec![], group);
        Ok(Self {
            resolver: TokioAsyncResolver::tokio(config, ResolverOpts::default())?,
        })
    }
}

#[async_trait::async_trait]
impl SrvLookup for SystemSrvLookup {
    async fn lookup_srv(&self, name: &Name) -> Result<Vec<SRV>, Error> {
        match self.resolver.srv_lookup(name.clone()).await {
            Ok(lookup) => Ok(lookup.iter().cloned().collect()),
            Err(err) => Err(lookup_error(name, err)),
        }
    }
}

fn lookup_error(name: &Name, err: ResolveError) -> Error {
    // NXDOMAIN means the domain itself isn't served, which is reported like any other failed
    // query. An empty NOERROR answer only means the service isn't published.
    let unpublished = matches!(
        err.kind(),
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code != ResponseCode::NXDomain
    );
    if unpublished {
        Error::NoRecords(name.to_string())
    } else {
        Error::LookupFailed {
            name: name.to_string(),
            source: err,
        }
    }
}
