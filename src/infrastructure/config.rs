use std::path::PathBuf;

use config::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{infrastructure::keybindings::KeyBindings, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub rpc_url: String,
    #[serde(default)]
    pub privatekey: Option<SecretString>,
}

/// Everything a local wallet needs to sign: endpoint and key
#[derive(Clone, Debug)]
pub struct WalletSettings {
    pub rpc_url: String,
    pub private_key: SecretString,
}

impl Config {
    /// Loads the embedded defaults, then merges the first user config file
    /// found in the config directory over them. A missing user file is not an
    /// error: the client then starts without a wallet.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::warn!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config);
        Ok(cfg)
    }

    /// The configuration compiled into the binary
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Fills anything the user left unset from `defaults`.
    pub fn merge_defaults(&mut self, defaults: Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        if self.contract_address.is_empty() {
            self.contract_address = defaults.contract_address;
        }
        if self.rpc_url.is_empty() {
            self.rpc_url = defaults.rpc_url;
        }
    }

    /// Wallet settings, or `None` when no wallet is configured.
    pub fn wallet_settings(&self) -> Option<WalletSettings> {
        let private_key = self.privatekey.as_ref()?;
        if self.rpc_url.trim().is_empty() || private_key.expose_secret().trim().is_empty() {
            return None;
        }
        Some(WalletSettings {
            rpc_url: self.rpc_url.trim().to_string(),
            private_key: private_key.clone(),
        })
    }
}
