//! Configuração do keeper-watch carregada a partir de `keeper-watch.toml`.
//!
//! A struct [`WatchConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis; variáveis de
//! ambiente têm precedência sobre o arquivo e flags da CLI sobre ambas.
//! Endpoint RPC, endereço do sequencer e webhook são obrigatórios.

use serde::Deserialize;
use std::path::Path;

use crate::error::WatchError;

/// Arquivo lido do diretório atual quando `--config` não é informado.
pub const DEFAULT_CONFIG_FILE: &str = "keeper-watch.toml";

/// Configuração de nível superior carregada de `keeper-watch.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Endpoint JSON-RPC (http ou https) do nó Ethereum.
    #[serde(default)]
    pub rpc_url: String,

    /// Endereço do contrato sequencer que registra os jobs.
    #[serde(default)]
    pub sequencer_address: String,

    /// URL do webhook do Discord que recebe os alertas.
    #[serde(default)]
    pub discord_webhook_url: String,

    /// Nome da rede de keepers passado ao predicado `workable`.
    #[serde(default = "default_network")]
    pub network: String,

    /// Quantidade de blocos inspecionados por job, do mais novo para o mais antigo.
    #[serde(default = "default_block_window")]
    pub block_window: u64,

    /// Intervalo em segundos entre ciclos no modo `watch`.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Timeout em segundos das chamadas HTTP ao webhook.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

// Valor padrão para a rede: "MAINNET".
fn default_network() -> String {
    "MAINNET".to_string()
}

// Valor padrão para a janela: 10 blocos.
fn default_block_window() -> u64 {
    10
}

// Valor padrão para o intervalo: 5 minutos.
fn default_interval_secs() -> u64 {
    300
}

// Valor padrão para o timeout HTTP: 10s.
fn default_http_timeout_secs() -> u64 {
    10
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            rpc_url: String::new(),
            sequencer_address: String::new(),
            discord_webhook_url: String::new(),
            network: default_network(),
            block_window: default_block_window(),
            interval_secs: default_interval_secs(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

impl WatchConfig {
    /// Carrega a configuração de `path`, ou de `keeper-watch.toml` no diretório atual.
    /// Um arquivo explícito ausente é erro; o arquivo padrão ausente resulta nos defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, WatchError> {
        let mut config = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                toml::from_str::<WatchConfig>(&contents)?
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    let contents = std::fs::read_to_string(path)?;
                    toml::from_str::<WatchConfig>(&contents)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Sobrepõe valores com variáveis de ambiente não vazias.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), WatchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = var("RPC_URL") {
            self.rpc_url = url;
        }
        if let Some(address) = var("SEQUENCER_ADDRESS") {
            self.sequencer_address = address;
        }
        if let Some(url) = var("DISCORD_WEBHOOK_URL") {
            self.discord_webhook_url = url;
        }
        if let Some(network) = var("KEEPER_NETWORK") {
            self.network = network;
        }
        if let Some(window) = var("BLOCK_WINDOW") {
            self.block_window = parse_number("BLOCK_WINDOW", &window)?;
        }
        if let Some(interval) = var("WATCH_INTERVAL_SECS") {
            self.interval_secs = parse_number("WATCH_INTERVAL_SECS", &interval)?;
        }
        Ok(())
    }

    /// Aplica as flags da CLI, que têm precedência sobre arquivo e ambiente.
    pub fn with_overrides(
        mut self,
        block_window: Option<u64>,
        network: Option<String>,
        interval_secs: Option<u64>,
    ) -> Self {
        if let Some(window) = block_window {
            self.block_window = window;
        }
        if let Some(network) = network {
            self.network = network;
        }
        if let Some(interval) = interval_secs {
            self.interval_secs = interval;
        }
        self
    }

    /// Rejeita configurações incompletas; a ausência de um valor obrigatório é fatal.
    pub fn validate(&self) -> Result<(), WatchError> {
        let required = [
            ("RPC_URL", &self.rpc_url),
            ("SEQUENCER_ADDRESS", &self.sequencer_address),
            ("DISCORD_WEBHOOK_URL", &self.discord_webhook_url),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(WatchError::Config(format!("{name} is required")));
        }
        if self.block_window == 0 {
            return Err(WatchError::Config("block_window must be at least 1".into()));
        }
        if self.interval_secs == 0 {
            return Err(WatchError::Config("interval_secs must be at least 1".into()));
        }
        if self.http_timeout_secs == 0 {
            return Err(WatchError::Config(
                "http_timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn parse_number(name: &str, value: &str) -> Result<u64, WatchError> {
    value
        .trim()
        .parse()
        .map_err(|_| WatchError::Config(format!("{name} must be a positive integer, got {value:?}")))
}
