//! daily.rs — Redistribuição dos períodos por dia do calendário local
//!
//! Cada período é fatiado nas meias-noites locais (deslocamento fixo) e o tempo de cada
//! fatia vai para o balde da data local correspondente.

use crate::summary::{hours, percentages};
use crate::types::{DayBucket, Period, Status};
use crate::window::{Window, local_date, local_midnight};
use chrono::{FixedOffset, NaiveDate, TimeDelta};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
struct DayTotals {
    on: TimeDelta,
    off: TimeDelta,
}

impl DayTotals {
    fn add(&mut self, status: Status, duration: TimeDelta) {
        match status {
            Status::On => self.on += duration,
            Status::Off => self.off += duration,
        }
    }
}

impl DayBucket {
    pub fn new(date: NaiveDate, on_time: TimeDelta, off_time: TimeDelta) -> Self {
        let (percentage_on, percentage_off) = percentages(on_time, off_time);
        Self {
            date,
            on_time,
            off_time,
            percentage_on,
            percentage_off,
            on_hours: hours(on_time),
            off_hours: hours(off_time),
        }
    }
}

/// Um balde por data da janela, em ordem crescente, inclusive dias sem períodos.
pub fn aggregate(periods: &[Period], window: &Window) -> Vec<DayBucket> {
    let mut days: BTreeMap<NaiveDate, DayTotals> = window
        .days()
        .map(|date| (date, DayTotals::default()))
        .collect();

    for period in periods {
        distribute(&mut days, period, window.offset());
    }

    days.into_iter()
        .map(|(date, totals)| DayBucket::new(date, totals.on, totals.off))
        .collect()
}

fn distribute(days: &mut BTreeMap<NaiveDate, DayTotals>, period: &Period, offset: FixedOffset) {
    if period.start >= period.end {
        return;
    }

    let mut date = local_date(period.start, offset);
    let mut day_start = local_midnight(date, offset);

    while day_start < period.end {
        let Some(next_date) = date.succ_opt() else {
            break;
        };
        let day_next = local_midnight(next_date, offset);

        let overlap = period.end.min(day_next) - period.start.max(day_start);
        if overlap > TimeDelta::zero() {
            // Fatias fora da janela (só nas bordas) são descartadas
            if let Some(totals) = days.get_mut(&date) {
                totals.add(period.status, overlap);
            }
        }

        date = next_date;
        day_start = day_next;
    }
}
