//! Mail client autoconfiguration documents.
//!
//! A [`ConfigDocument`] describes a single email provider for the configured domain, with one
//! incoming (IMAP over TLS) and one outgoing (submission over TLS) server located through SRV
//! records. Serialized it matches the [Thunderbird autoconfig] `clientConfig` schema, version
//! 1.1:
//!
//! ```xml
//! <clientConfig version="1.1">
//!   <emailProvider id="marshland.ovh">
//!     <domain>marshland.ovh</domain>
//!     <displayName>marshland.ovh</displayName>
//!     <displayShortName>marshland.ovh</displayShortName>
//!     <incomingServer type="imap">
//!       <hostname>hermes.marshland.ovh</hostname>
//!       <port>993</port>
//!       <socketType>SSL</socketType>
//!       <authentication>password-cleartext</authentication>
//!       <username>%EMAILLOCALPART%</username>
//!     </incomingServer>
//!     <outgoingServer type="smtp">
//!       <hostname>hermes.marshland.ovh</hostname>
//!       <port>465</port>
//!       <socketType>SSL</socketType>
//!       <authentication>password-cleartext</authentication>
//!       <username>%EMAILLOCALPART%</username>
//!     </outgoingServer>
//!   </emailProvider>
//! </clientConfig>
//! ```
//!
//! The document is written without the indentation shown above.
//!
//! [Thunderbird autoconfig]: https://wiki.mozilla.org/Thunderbird:Autoconfiguration:ConfigFileFormat

mod builder;
pub mod model;
pub mod xml;

pub use builder::build_document;
pub use model::{ConfigDocument, ProviderRecord, Role, ServerDescriptor};
pub use xml::{render, serialize};
