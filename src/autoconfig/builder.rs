use crate::autoconfig::model::{
    ConfigDocument, ProviderRecord, Role, ServerDescriptor, SCHEMA_VERSION,
};
use crate::error::Error;
use crate::srv::{self, SrvLookup};

const SRV_TRANSPORT: &str = "tcp";

/// Build the autoconfig document for `domain` from its `_imaps._tcp` and `_submission._tcp` SRV
/// records.
///
/// The incoming lookup runs first. If it fails the outgoing lookup isn't attempted and no
/// document is built.
///
/// # Errors
///
/// Returns the first lookup error encountered, see [`srv::resolve`].
pub async fn build_document(
    lookup: &(dyn SrvLookup + Send + Sync),
    domain: &str,
) -> Result<ConfigDocument, Error> {
    let incoming = server(lookup, Role::Incoming, domain).await?;
    let outgoing = server(lookup, Role::Outgoing, domain).await?;

    Ok(ConfigDocument {
        version: SCHEMA_VERSION,
        providers: vec![ProviderRecord::for_domain(domain, incoming, outgoing)],
    })
}

async fn server(
    lookup: &(dyn SrvLookup + Send + Sync),
    role: Role,
    domain: &str,
) -> Result<ServerDescriptor, Error> {
    let endpoint = srv::resolve(lookup, role.service(), SRV_TRANSPORT, domain).await?;
    Ok(ServerDescriptor::new(role, endpoint))
}
