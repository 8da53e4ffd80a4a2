use clap::Parser;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use zonerelay_domain::CliOverrides;

mod admin;
mod bootstrap;
mod di;
mod server;

use admin::AdminConsole;

#[derive(Parser)]
#[command(name = "zonerelay")]
#[command(version = "0.1.0")]
#[command(about = "Zonerelay - local zone DNS server with upstream forwarding")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Zone file path
    #[arg(short = 'z', long, value_name = "FILE")]
    zone_file: Option<String>,

    /// Upstream resolver (host:port); repeat to set several, tried in order
    #[arg(short = 'u', long = "upstream", value_name = "ADDR")]
    upstreams: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        zone_file: cli.zone_file.clone(),
        upstream_servers: cli.upstreams.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Zonerelay v{}", env!("CARGO_PKG_VERSION"));

    // Zone must load before the socket is bound
    let repos = di::Repositories::new(&config);
    let use_cases = di::UseCases::new(&repos).await?;
    let dns_services = di::DnsServices::new(&config, &use_cases)?;

    let shutdown = CancellationToken::new();

    let dns_addr = config.server.dns_addr();
    let listener = server::bind_dns_listener(&dns_addr, Arc::clone(&dns_services.handler))?;
    let listener_task = tokio::spawn(listener.run(shutdown.clone()));

    let mut console = AdminConsole::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        Arc::clone(&use_cases.add_record),
        shutdown.clone(),
    );

    let interrupted = tokio::select! {
        result = console.run() => {
            if let Err(e) = result {
                error!(error = %e, "Admin console failed");
            }
            false
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt received, shutting down");
            true
        }
    };

    // Without console input the server runs until interrupted
    if !interrupted && !shutdown.is_cancelled() {
        tokio::select! {
            _ = shutdown.cancelled() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, shutting down");
            }
        }
    }

    shutdown.cancel();
    listener_task.await?;

    info!("Server shutdown complete");

    if interrupted {
        // A blocking stdin read would otherwise hold the runtime open
        std::process::exit(0);
    }

    Ok(())
}
