use captive_portal_application::use_cases::{LoadPortalPageUseCase, StartAccessPointUseCase};
use captive_portal_domain::{CliOverrides, Config};
use clap::Parser;
use std::future::Future;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::task::{JoinHandle, LocalSet};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser, Debug)]
#[command(name = "captive-portal")]
#[command(version)]
#[command(about = "Captive portal - answers every DNS lookup with this device and serves one page")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Access point SSID
    #[arg(long)]
    ssid: Option<String>,

    /// Access point address, returned in every DNS answer
    #[arg(short = 'a', long)]
    address: Option<Ipv4Addr>,

    /// HTML file served as the portal page
    #[arg(short = 'p', long, value_name = "FILE")]
    page: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dns_port: self.dns_port,
            web_port: self.web_port,
            bind_address: self.bind.clone(),
            ssid: self.ssid.clone(),
            address: self.address,
            page_path: self.page.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting Captive Portal v{}", env!("CARGO_PKG_VERSION"));

    // One thread, cooperative tasks.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = LocalSet::new();

    let result = local.block_on(&runtime, run(config));

    // Discard every task and timer this run retained.
    drop(local);
    drop(runtime);

    result
}

async fn run(config: Config) -> anyhow::Result<()> {
    let adapters = di::Adapters::new(&config);

    let iface = StartAccessPointUseCase::new(adapters.access_point.clone())
        .execute(&config.access_point)
        .await?;

    bootstrap::install_fatal_handler();

    let page = LoadPortalPageUseCase::new(adapters.page_source.clone()).execute()?;

    let bind_ip: IpAddr = config.server.bind_address.parse()?;

    let web_addr = SocketAddr::new(bind_ip, config.server.web_port);
    let http_task = server::start_web_server(web_addr, page)?;

    let dns_addr = SocketAddr::new(bind_ip, config.server.dns_port);
    let dns_task = server::start_dns_server(dns_addr, iface.address, &config.dns)?;

    info!("Looping forever...");

    serve_until(tokio::signal::ctrl_c(), http_task, dns_task).await
}

/// Waits for `shutdown` or for either responder to stop, whichever comes first.
///
/// Only the shutdown signal is a clean exit. A responder task never returns
/// on its own, so its completion is reported as an error.
async fn serve_until<F>(
    shutdown: F,
    http_task: JoinHandle<()>,
    dns_task: JoinHandle<()>,
) -> anyhow::Result<()>
where
    F: Future<Output = io::Result<()>>,
{
    tokio::select! {
        signal = shutdown => {
            signal?;
            info!("Bye");
            Ok(())
        }
        joined = http_task => {
            anyhow::bail!("HTTP responder exited: {:?}", joined)
        }
        joined = dns_task => {
            anyhow::bail!("DNS responder exited: {:?}", joined)
        }
    }
}
