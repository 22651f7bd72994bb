use clap::Parser;

use crate::{infrastructure::config::Config, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "ADDRESS",
        help = "Voting contract address, overrides `contract_address` in the config file"
    )]
    pub contract_address: Option<String>,

    #[arg(
        short,
        long,
        value_name = "URL",
        help = "JSON-RPC endpoint, overrides `rpc_url` in the config file"
    )]
    pub rpc_url: Option<String>,
}

impl Cli {
    /// Command-line values win over the config file.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(address) = &self.contract_address {
            config.contract_address = address.clone();
        }
        if let Some(url) = &self.rpc_url {
            config.rpc_url = url.clone();
        }
    }
}
