use super::UseCases;
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use zonerelay_application::use_cases::HandleDnsQueryUseCase;
use zonerelay_domain::Config;
use zonerelay_infrastructure::dns::{DnsServerHandler, UdpForwarder};

pub struct DnsServices {
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    pub fn new(config: &Config, use_cases: &UseCases) -> anyhow::Result<Self> {
        let upstreams = config
            .dns
            .upstream_addrs()
            .map_err(anyhow::Error::msg)
            .context("invalid upstream server")?;

        info!(
            upstreams = ?config.dns.upstream_servers,
            timeout_secs = config.dns.query_timeout,
            "Initializing upstream forwarder"
        );

        let forwarder = Arc::new(UdpForwarder::new(
            upstreams,
            config.dns.query_timeout_duration(),
        ));
        let handle_query = Arc::new(HandleDnsQueryUseCase::new(
            Arc::clone(&use_cases.zone),
            forwarder,
        ));

        Ok(Self {
            handler: Arc::new(DnsServerHandler::new(handle_query)),
        })
    }
}
