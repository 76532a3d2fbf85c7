use crate::error::Error;
use crate::srv::{DynSrvLookup, SystemSrvLookup};
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// The mail domain autoconfig documents are generated for.
    pub domain: String,
    pub http_bind_addr: SocketAddr,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_http_timeout")]
    pub http_timeout: Duration,
    /// Name servers to send SRV queries to. When empty the system resolver configuration is used.
    #[serde(default)]
    pub nameservers: Vec<IpAddr>,
}

fn default_http_timeout() -> Duration {
    DEFAULT_HTTP_TIMEOUT
}

impl Config {
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        Ok(conf)
    }

    pub fn srv_lookup(&self) -> Result<DynSrvLookup, Error> {
        let lookup = if self.nameservers.is_empty() {
            SystemSrvLookup::from_system_conf()?
        } else {
            SystemSrvLookup::from_nameservers(&self.nameservers)?
        };
        Ok(Arc::new(lookup))
    }
}
