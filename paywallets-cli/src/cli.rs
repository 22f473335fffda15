use console::{style, Term};
use paywallets_client::store::{FetchStatus, WalletState};
use paywallets_core::primitives::Wallet;
use serde_json::Value;

pub fn format_wallet(wallet: &Wallet) -> String {
    let extra = wallet
        .extra
        .iter()
        .map(|(key, value)| match value {
            Value::String(text) => format!("{key}: {text}"),
            other => format!("{key}: {other}"),
        })
        .collect::<Vec<_>>();

    if extra.is_empty() {
        format!("#{} {}", wallet.id, wallet.name)
    } else {
        format!("#{} {} ({})", wallet.id, wallet.name, extra.join(", "))
    }
}

pub fn show_wallets(term: &Term, wallets: &[Wallet]) -> anyhow::Result<()> {
    if wallets.is_empty() {
        term.write_line("No wallets found.")?;
        return Ok(());
    }

    term.write_line(&format!("Wallets ({}):", style(wallets.len()).cyan()))?;
    for wallet in wallets {
        term.write_line(&format!(" - {}", format_wallet(wallet)))?;
    }
    Ok(())
}

pub fn show_state(term: &Term, state: &WalletState) -> anyhow::Result<()> {
    match state.status {
        FetchStatus::Failed => {
            let message = state.error.as_deref().unwrap_or_default();
            term.write_line(&format!("Error: {}", style(message).red()))?;
            Ok(())
        }
        _ => show_wallets(term, &state.wallets),
    }
}
