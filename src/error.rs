use std::path::PathBuf;
use thiserror::Error;

/// Erros de validação dos parâmetros de consulta
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} é obrigatório")]
    Missing(&'static str),
    #[error("{field} inválido: '{value}' (esperado YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
}

/// Falhas ao obter o snapshot de eventos
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("falha ao ler {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("arquivo de eventos malformado: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] ::config::ConfigError),
    #[error("utc_offset_hours deve estar entre -23 e 23 (recebido {0})")]
    InvalidOffset(i32),
}
