#![deny(warnings)]

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use ballotui::{
    domain::wallet::WalletProvider,
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui, wallet::LocalWallet},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    args.apply_to(&mut config);

    // No wallet is not fatal: the first load reports it to the user.
    let wallet = config
        .wallet_settings()
        .map(|settings| Arc::new(LocalWallet::new(settings)) as Arc<dyn WalletProvider>);
    if wallet.is_none() {
        log::warn!("No wallet configured");
    }

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(config, wallet, tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
