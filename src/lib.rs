//! Estatísticas de disponibilidade de energia elétrica.
//!
//! Reconstrói períodos ligado/desligado a partir de eventos pontuais e agrega o tempo
//! por janela e por dia do calendário local (deslocamento UTC fixo).

pub mod cache;
pub mod config;
pub mod daily;
pub mod error;
pub mod reconstruct;
pub mod stats;
pub mod storage;
pub mod summary;
pub mod types;
pub mod window;

pub use cache::CachedSource;
pub use daily::aggregate;
pub use error::{ConfigError, SourceError, ValidationError};
pub use reconstruct::reconstruct;
pub use stats::StatsService;
pub use storage::{EventSource, JsonFileStore, MemoryStore};
pub use summary::summarize;
pub use types::{DayBucket, Event, Period, Statistics, Status, Summary, WindowSummary};
pub use window::Window;
