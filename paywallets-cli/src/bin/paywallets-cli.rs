use clap::{Parser, Subcommand};
use console::{style, Term};
use paywallets_client::{config::ApiConfig, http::CrossPlatformHttpClient, store::WalletStore};
use paywalletscli::cli;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(arg_required_else_help(true))]
struct Opts {
    #[clap(flatten)]
    api: ApiConfig,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone)]
enum Command {
    /// List the wallets of a platform
    Wallets {
        #[clap(long, env = "PAYWALLETS_PLATFORM_ID", allow_negative_numbers = true)]
        platform_id: i64,
        #[clap(long, env = "PAYWALLETS_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Show version and configuration
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Opts::parse();
    let term = Term::stdout();

    match cli.command {
        Command::Info => {
            let version = style(env!("CARGO_PKG_VERSION")).cyan();
            let base_url = style(cli.api.base_url()).cyan();
            term.write_line(&format!("Version: {version}"))?;
            term.write_line(&format!("API: {base_url}"))?;
        }
        Command::Wallets { platform_id, token } => {
            let store = WalletStore::new(CrossPlatformHttpClient::from_config(&cli.api));
            store.set_auth(platform_id, token).await;

            // the store keeps the failure message for display
            let result = store.fetch_wallets().await;
            cli::show_state(&term, &store.snapshot().await)?;
            if result.is_err() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
