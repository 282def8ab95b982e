//! storage.rs — Fonte de eventos (snapshot imutável por consulta)

use crate::error::SourceError;
use crate::types::Event;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fornece o snapshot completo de eventos. O motor nunca depende de cache nem de ordem.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Event>, SourceError>;
}

/// Lê o `events.json` gravado pela camada de aquisição.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EventSource for JsonFileStore {
    async fn fetch(&self) -> Result<Vec<Event>, SourceError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            // Nenhuma coleta ainda: histórico vazio
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("[FONTE] {} ainda não existe.", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(SourceError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let events: Vec<Event> = serde_json::from_slice(&raw)?;
        debug!(
            "[FONTE] {} eventos lidos de {}.",
            events.len(),
            self.path.display()
        );
        Ok(events)
    }
}

/// Snapshot em memória
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    events: Vec<Event>,
}

impl MemoryStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl EventSource for MemoryStore {
    async fn fetch(&self) -> Result<Vec<Event>, SourceError> {
        Ok(self.events.clone())
    }
}
