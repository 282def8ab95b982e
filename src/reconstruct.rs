//! reconstruct.rs — Reconstrução de períodos contínuos a partir de eventos pontuais

use crate::types::{Event, Period};
use chrono::{DateTime, Utc};

/// Particiona a parte conhecida de `[window_start, window_end)` em períodos contíguos.
///
/// - `window_end` é o limite aberto; eventos em `window_end` ou depois ficam fora.
/// - `now` limita a extrapolação do último estado conhecido.
/// - O estado de fronteira vem do último evento estritamente anterior à janela. Sem ele,
///   o trecho entre o início da janela e o primeiro evento é desconhecido e fica de fora.
/// - Períodos consecutivos com o mesmo estado não são fundidos.
pub fn reconstruct(
    events: &[Event],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Vec<Period> {
    let effective_end = window_end.min(now);
    if effective_end <= window_start {
        return Vec::new();
    }

    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.instant);

    let first_in = sorted.partition_point(|event| event.instant < window_start);
    let past_end = sorted.partition_point(|event| event.instant < window_end);
    let boundary = first_in.checked_sub(1).map(|idx| &sorted[idx]);
    let in_window = &sorted[first_in..past_end];

    let (Some(first), Some(last)) = (in_window.first(), in_window.last()) else {
        return match boundary {
            Some(prev) => vec![Period::new(window_start, effective_end, prev.status)],
            None => Vec::new(),
        };
    };

    let mut periods = Vec::with_capacity(in_window.len() + 1);

    if let Some(prev) = boundary {
        if first.instant > window_start {
            periods.push(Period::new(window_start, first.instant, prev.status));
        }
    }

    periods.extend(
        in_window
            .windows(2)
            .map(|pair| Period::new(pair[0].instant, pair[1].instant, pair[0].status)),
    );

    if effective_end > last.instant {
        periods.push(Period::new(last.instant, effective_end, last.status));
    }

    periods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;
    use chrono::{TimeDelta, TimeZone};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, day, hour, 0, 0).unwrap()
    }

    fn ev(day: u32, hour: u32, status: Status) -> Event {
        Event::new(at(day, hour), status)
    }

    #[test]
    fn future_window_is_empty() {
        let events = [ev(1, 0, Status::On)];
        assert!(reconstruct(&events, at(5, 0), at(6, 0), at(4, 0)).is_empty());
        assert!(reconstruct(&events, at(5, 0), at(6, 0), at(5, 0)).is_empty());
    }

    #[test]
    fn boundary_only_fills_whole_window() {
        let events = [ev(1, 0, Status::Off)];
        let periods = reconstruct(&events, at(3, 0), at(4, 0), at(10, 0));
        assert_eq!(periods, vec![Period::new(at(3, 0), at(4, 0), Status::Off)]);
    }

    #[test]
    fn boundary_only_clips_to_now() {
        let events = [ev(1, 0, Status::On)];
        let periods = reconstruct(&events, at(3, 0), at(4, 0), at(3, 15));
        assert_eq!(periods, vec![Period::new(at(3, 0), at(3, 15), Status::On)]);
        assert_eq!(periods[0].duration, TimeDelta::hours(15));
    }

    #[test]
    fn unknown_state_without_any_prior_event() {
        let events = [ev(9, 0, Status::On)];
        assert!(reconstruct(&events, at(3, 0), at(4, 0), at(10, 0)).is_empty());
        assert!(reconstruct(&[], at(3, 0), at(4, 0), at(10, 0)).is_empty());
    }

    #[test]
    fn leading_gap_dropped_without_boundary() {
        let events = [ev(3, 6, Status::On), ev(3, 12, Status::Off)];
        let periods = reconstruct(&events, at(3, 0), at(4, 0), at(10, 0));
        assert_eq!(
            periods,
            vec![
                Period::new(at(3, 6), at(3, 12), Status::On),
                Period::new(at(3, 12), at(4, 0), Status::Off),
            ]
        );
    }

    #[test]
    fn leading_gap_filled_from_boundary() {
        let events = [ev(2, 20, Status::Off), ev(3, 6, Status::On)];
        let periods = reconstruct(&events, at(3, 0), at(4, 0), at(10, 0));
        assert_eq!(
            periods,
            vec![
                Period::new(at(3, 0), at(3, 6), Status::Off),
                Period::new(at(3, 6), at(4, 0), Status::On),
            ]
        );
    }

    #[test]
    fn event_on_window_start_needs_no_leading_period() {
        let events = [ev(2, 20, Status::Off), ev(3, 0, Status::On)];
        let periods = reconstruct(&events, at(3, 0), at(4, 0), at(10, 0));
        assert_eq!(periods, vec![Period::new(at(3, 0), at(4, 0), Status::On)]);
    }

    #[test]
    fn repeated_status_is_not_merged() {
        let events = [
            ev(3, 1, Status::Off),
            ev(3, 2, Status::Off),
            ev(3, 3, Status::On),
        ];
        let periods = reconstruct(&events, at(3, 0), at(4, 0), at(3, 5));
        assert_eq!(
            periods,
            vec![
                Period::new(at(3, 1), at(3, 2), Status::Off),
                Period::new(at(3, 2), at(3, 3), Status::Off),
                Period::new(at(3, 3), at(3, 5), Status::On),
            ]
        );
    }

    #[test]
    fn unsorted_input_is_sorted_first() {
        let events = [ev(3, 12, Status::Off), ev(2, 1, Status::On), ev(3, 6, Status::On)];
        let periods = reconstruct(&events, at(3, 0), at(4, 0), at(10, 0));
        assert_eq!(
            periods,
            vec![
                Period::new(at(3, 0), at(3, 6), Status::On),
                Period::new(at(3, 6), at(3, 12), Status::On),
                Period::new(at(3, 12), at(4, 0), Status::Off),
            ]
        );
    }

    #[test]
    fn events_after_window_are_ignored() {
        let events = [ev(2, 0, Status::On), ev(4, 0, Status::Off), ev(5, 0, Status::On)];
        let periods = reconstruct(&events, at(3, 0), at(4, 0), at(10, 0));
        assert_eq!(periods, vec![Period::new(at(3, 0), at(4, 0), Status::On)]);
    }

    #[test]
    fn no_trailing_period_when_last_event_is_now() {
        let events = [ev(3, 1, Status::On), ev(3, 5, Status::Off)];
        let periods = reconstruct(&events, at(3, 0), at(4, 0), at(3, 5));
        assert_eq!(periods, vec![Period::new(at(3, 1), at(3, 5), Status::On)]);
    }
}
