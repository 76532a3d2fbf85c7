//! HTTP API serving autoconfig documents.
//!
//! # API Endpoints
//!
//! ## `/*` (GET)
//!
//!   Every path answers with the autoconfig document for the configured
//!   [`Config::domain`][`crate::config::Config::domain`]. Mail clients look for it under
//!   `/mail/config-v1.1.xml` or `/.well-known/autoconfig/mail/config-v1.1.xml`, so the server is
//!   usually deployed behind `autoconfig.<domain>`.
//!
//!   The domain's SRV records are resolved on every request. When both the `_imaps._tcp` and the
//!   `_submission._tcp` lookups succeed, returns HTTP 200 (OK) with a `text/xml` body:
//!
//!   ```bash
//!   ❯ curl http://localhost:9090/mail/config-v1.1.xml
//!   <?xml version="1.0" encoding="UTF-8"?>
//!   <clientConfig version="1.1"><emailProvider id="marshland.ovh">...
//!   ```
//!
//!   Otherwise returns HTTP 500 (Internal Server Error) with the error message as a plain text
//!   body:
//!
//!   ```bash
//!   ❯ curl http://localhost:9090/
//!   no SRV records found for "_imaps._tcp.marshland.ovh."
//!   ```
//!
//!   Other methods get HTTP 405 (Method Not Allowed).

mod api_error;
mod routes;
pub mod server;

pub use routes::new as router;
pub use server::new;
