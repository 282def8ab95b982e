//! stats.rs — Consultas de estatística sobre um snapshot de eventos
//!
//! As funções livres são puras: recebem eventos, janela e um `now` fixo. O
//! `StatsService` só busca o snapshot, captura `now` uma vez e delega a elas.

use crate::daily::aggregate;
use crate::error::ValidationError;
use crate::reconstruct::reconstruct;
use crate::storage::EventSource;
use crate::summary::{hours, summarize};
use crate::types::{
    DateRange, DayBucket, Event, Period, RangeDigest, Statistics, Status, Summary,
};
use crate::window::{Window, local_date};
use chrono::{DateTime, Days, FixedOffset, NaiveDate, Utc};
use tracing::{debug, info, warn};

fn periods_for(events: &[Event], window: &Window, now: DateTime<Utc>) -> Vec<Period> {
    reconstruct(events, window.start(), window.end_exclusive(), now)
}

/// Eventos brutos dentro da janela, em ordem crescente.
pub fn events_within(events: &[Event], window: &Window) -> Vec<Event> {
    let mut inside: Vec<Event> = events
        .iter()
        .filter(|event| window.contains(event.instant))
        .cloned()
        .collect();
    inside.sort_by_key(|event| event.instant);
    inside
}

pub fn statistics(events: &[Event], window: &Window, now: DateTime<Utc>) -> Statistics {
    let periods = periods_for(events, window, now);
    let summary = summarize(&periods);
    let events = events_within(events, window);
    Statistics {
        total_events: events.len(),
        total_on_time: summary.total_on_time,
        total_off_time: summary.total_off_time,
        percentage_on: summary.percentage_on,
        percentage_off: summary.percentage_off,
        periods,
        events,
    }
}

pub fn daily_statistics(events: &[Event], window: &Window, now: DateTime<Utc>) -> Vec<DayBucket> {
    aggregate(&periods_for(events, window, now), window)
}

fn digest(events: &[Event], window: &Window, now: DateTime<Utc>) -> RangeDigest {
    let summary = summarize(&periods_for(events, window, now));
    RangeDigest {
        on_hours: hours(summary.total_on_time),
        off_hours: hours(summary.total_off_time),
        percentage_on: summary.percentage_on,
        percentage_off: summary.percentage_off,
    }
}

fn trailing_window(today: NaiveDate, days: u64, offset: FixedOffset) -> Window {
    let start = today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
    Window::new(start, today, offset)
}

/// Visão geral: contagens, primeiro/último evento e as janelas de 7 e 30 dias até hoje.
pub fn overview(events: &[Event], offset: FixedOffset, now: DateTime<Utc>) -> Summary {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.instant);

    let on_events = sorted.iter().filter(|e| e.status == Status::On).count();
    let first_event = sorted.first().cloned();
    let last_event = sorted.last().cloned();
    let date_range = first_event
        .as_ref()
        .zip(last_event.as_ref())
        .map(|(first, last)| DateRange {
            start: first.instant,
            end: last.instant,
        });

    let today = local_date(now, offset);
    Summary {
        total_events: sorted.len(),
        on_events,
        off_events: sorted.len() - on_events,
        first_event,
        last_event,
        date_range,
        last_7_days: digest(&sorted, &trailing_window(today, 7, offset), now),
        last_30_days: digest(&sorted, &trailing_window(today, 30, offset), now),
    }
}

/// Ponto de entrada das consultas para as camadas externas (HTTP, CLI).
pub struct StatsService<S> {
    source: S,
    offset: FixedOffset,
}

impl<S: EventSource> StatsService<S> {
    pub fn new(source: S, offset: FixedOffset) -> Self {
        Self { source, offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Falha da fonte degrada para histórico vazio (estatísticas zeradas).
    async fn snapshot(&self) -> Vec<Event> {
        match self.source.fetch().await {
            Ok(events) => events,
            Err(e) => {
                warn!(
                    "[ESTATISTICAS] Fonte de eventos indisponível, usando histórico vazio: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    pub async fn calculate_statistics(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Statistics, ValidationError> {
        self.calculate_statistics_at(start_date, end_date, Utc::now())
            .await
    }

    pub async fn calculate_statistics_at(
        &self,
        start_date: &str,
        end_date: &str,
        now: DateTime<Utc>,
    ) -> Result<Statistics, ValidationError> {
        let window = Window::parse(start_date, end_date, self.offset)?;
        let events = self.snapshot().await;
        let stats = statistics(&events, &window, now);
        info!(
            "[ESTATISTICAS] {}..{}: {} eventos, {} períodos, {:.2}% ligado.",
            window.start_date,
            window.end_date,
            stats.total_events,
            stats.periods.len(),
            stats.percentage_on
        );
        Ok(stats)
    }

    pub async fn get_daily_statistics(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<DayBucket>, ValidationError> {
        self.get_daily_statistics_at(start_date, end_date, Utc::now())
            .await
    }

    pub async fn get_daily_statistics_at(
        &self,
        start_date: &str,
        end_date: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<DayBucket>, ValidationError> {
        let window = Window::parse(start_date, end_date, self.offset)?;
        let events = self.snapshot().await;
        let buckets = daily_statistics(&events, &window, now);
        debug!(
            "[ESTATISTICAS] {}..{}: {} dias agregados.",
            window.start_date,
            window.end_date,
            buckets.len()
        );
        Ok(buckets)
    }

    pub async fn events_in_range(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Event>, ValidationError> {
        let window = Window::parse(start_date, end_date, self.offset)?;
        let events = self.snapshot().await;
        Ok(events_within(&events, &window))
    }

    pub async fn summary(&self) -> Summary {
        self.summary_at(Utc::now()).await
    }

    pub async fn summary_at(&self, now: DateTime<Utc>) -> Summary {
        let events = self.snapshot().await;
        overview(&events, self.offset, now)
    }
}
