use std::net::SocketAddr;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Serves the wallets frontend route table")]
pub struct Opts {
    #[clap(flatten)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerConfig {
    #[clap(long, default_value = "[::]:5173", env = "PAYWALLETS_HOST_PORT")]
    pub host_port: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host_port: "[::]:5173".parse().expect("invalid host port"),
        }
    }
}
