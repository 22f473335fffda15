use clap::Parser;
use paywalletsweb::{config::Opts, run_server, RouteTable};

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let opts = Opts::parse();

    run_server(RouteTable::default(), opts.server).await
}
