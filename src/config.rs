use crate::error::ConfigError;
use chrono::FixedOffset;
use config as config_crate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuração operacional do sistema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Arquivo JSON com os eventos coletados.
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,
    /// Deslocamento UTC fixo (em horas) do calendário local. Sem horário de verão.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
    /// Validade do snapshot de eventos em cache, em segundos.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_events_file() -> PathBuf {
    PathBuf::from("data/events.json")
}

fn default_utc_offset_hours() -> i32 {
    2
}

fn default_cache_ttl_secs() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_file: default_events_file(),
            utc_offset_hours: default_utc_offset_hours(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl Config {
    /// Arquivo opcional (`path`, extensão deduzida) e depois variáveis `ENERGIA_*`.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = config_crate::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config_crate::File::with_name(path).required(false));
        }
        builder = builder.add_source(config_crate::Environment::with_prefix("ENERGIA").try_parsing(true));
        let config: Config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.utc_offset().map(|_| ())
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(ConfigError::InvalidOffset(self.utc_offset_hours));
        }
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_hours))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
