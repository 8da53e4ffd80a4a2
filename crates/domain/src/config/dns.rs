use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::UpstreamAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream resolvers, tried in order for names outside the zone.
    #[serde(default = "default_upstream_servers")]
    pub upstream_servers: Vec<String>,

    /// Seconds to wait on a single upstream before moving to the next one.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl DnsConfig {
    pub fn upstream_addrs(&self) -> Result<Vec<UpstreamAddr>, String> {
        self.upstream_servers.iter().map(|s| s.parse()).collect()
    }

    pub fn query_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream_servers: default_upstream_servers(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_upstream_servers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string()]
}

fn default_query_timeout() -> u64 {
    5
}
