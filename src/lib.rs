//! mailconf
//!
//! Serves [Thunderbird autoconfig] documents for a mail domain, generated from the domain's
//! [RFC-6186][RFC-6186] SRV records.
//!
//! Mail clients implementing autoconfig discovery fetch
//! `http://autoconfig.<domain>/mail/config-v1.1.xml` to learn the servers for an address. Rather
//! than maintaining that file by hand, mailconf looks up `_imaps._tcp.<domain>` and
//! `_submission._tcp.<domain>` on every request and renders what it finds, so the DNS zone stays
//! the single source of truth.
//!
//! [Thunderbird autoconfig]: https://wiki.mozilla.org/Thunderbird:Autoconfiguration
//! [RFC-6186]: https://www.rfc-editor.org/rfc/rfc6186
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod autoconfig;
pub mod config;
pub mod error;
pub mod srv;

pub use api::new as new_http;
pub use autoconfig::{build_document, render, ConfigDocument};
pub use config::{Config, SharedConfig};
pub use srv::{DynSrvLookup, InMemorySrvLookup, SrvLookup, SystemSrvLookup};
