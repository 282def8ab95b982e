//! cache.rs — Cache com validade (TTL) na frente de qualquer `EventSource`

use crate::error::SourceError;
use crate::storage::EventSource;
use crate::types::Event;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info};

struct Snapshot {
    events: Vec<Event>,
    fetched_at: Instant,
}

/// Serve o último snapshot enquanto for mais novo que `ttl`.
///
/// Falhas da fonte interna não são guardadas; a próxima chamada tenta de novo.
pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    slot: Mutex<Option<Snapshot>>,
}

impl<S: EventSource> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Força a próxima leitura a ir até a fonte interna.
    pub async fn invalidate(&self) {
        self.slot.lock().await.take();
    }
}

#[async_trait]
impl<S: EventSource> EventSource for CachedSource<S> {
    async fn fetch(&self) -> Result<Vec<Event>, SourceError> {
        // Lock mantido durante a recarga: chamadas concorrentes esperam o mesmo snapshot
        let mut slot = self.slot.lock().await;
        if let Some(snapshot) = slot.as_ref() {
            if snapshot.fetched_at.elapsed() < self.ttl {
                debug!("[CACHE] {} eventos servidos do cache.", snapshot.events.len());
                return Ok(snapshot.events.clone());
            }
        }

        let events = self.inner.fetch().await?;
        info!("[CACHE] Snapshot recarregado com {} eventos.", events.len());
        *slot = Some(Snapshot {
            events: events.clone(),
            fetched_at: Instant::now(),
        });
        Ok(events)
    }
}
