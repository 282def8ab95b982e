use crate::types::{Period, Status, WindowSummary};
use chrono::TimeDelta;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Soma o tempo ligado/desligado de uma lista de períodos.
pub fn summarize(periods: &[Period]) -> WindowSummary {
    let (total_on_time, total_off_time) = totals(periods);
    let (percentage_on, percentage_off) = percentages(total_on_time, total_off_time);
    WindowSummary {
        total_on_time,
        total_off_time,
        percentage_on,
        percentage_off,
    }
}

pub(crate) fn totals(periods: &[Period]) -> (TimeDelta, TimeDelta) {
    periods
        .iter()
        .fold((TimeDelta::zero(), TimeDelta::zero()), |(on, off), period| {
            match period.status {
                Status::On => (on + period.duration, off),
                Status::Off => (on, off + period.duration),
            }
        })
}

/// Percentuais relativos a `on + off`; ambos zero quando não há tempo conhecido.
///
/// O percentual desligado é o complemento do ligado, para que a soma feche em 100.
pub fn percentages(on: TimeDelta, off: TimeDelta) -> (f64, f64) {
    let total = (on + off).num_milliseconds();
    if total <= 0 {
        return (0.0, 0.0);
    }
    let percentage_on = on.num_milliseconds() as f64 / total as f64 * 100.0;
    (percentage_on, 100.0 - percentage_on)
}

pub fn hours(duration: TimeDelta) -> f64 {
    duration.num_milliseconds() as f64 / MS_PER_HOUR
}
