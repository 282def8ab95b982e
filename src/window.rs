//! window.rs — Janela de consulta em dias do calendário local
//!
//! O calendário usa um deslocamento UTC fixo (sem horário de verão): a fronteira de cada
//! dia é sempre a mesma hora UTC.

use crate::error::ValidationError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Intervalo fechado de datas `[start_date, end_date]` no fuso local fixo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    offset: FixedOffset,
}

impl Window {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, offset: FixedOffset) -> Self {
        Self {
            start_date,
            end_date,
            offset,
        }
    }

    /// Converte os parâmetros `startDate`/`endDate` (YYYY-MM-DD).
    pub fn parse(
        start_date: &str,
        end_date: &str,
        offset: FixedOffset,
    ) -> Result<Self, ValidationError> {
        let start = parse_date("startDate", start_date)?;
        let end = parse_date("endDate", end_date)?;
        Ok(Self::new(start, end, offset))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Janela invertida: resposta vazia, não erro.
    pub fn is_empty(&self) -> bool {
        self.start_date > self.end_date
    }

    /// Meia-noite local do primeiro dia.
    pub fn start(&self) -> DateTime<Utc> {
        local_midnight(self.start_date, self.offset)
    }

    /// Último milissegundo do último dia (23:59:59.999 local).
    pub fn end(&self) -> DateTime<Utc> {
        self.end_exclusive() - TimeDelta::milliseconds(1)
    }

    /// Meia-noite local do dia seguinte ao último; limite aberto dos períodos.
    pub fn end_exclusive(&self) -> DateTime<Utc> {
        local_midnight(self.end_date, self.offset)
            .checked_add_signed(TimeDelta::days(1))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start() <= instant && instant < self.end_exclusive()
    }

    /// Todas as datas da janela em ordem crescente.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |day| *day <= end)
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

/// Instante UTC da meia-noite local de `date`.
pub fn local_midnight(date: NaiveDate, offset: FixedOffset) -> DateTime<Utc> {
    let local = date.and_time(NaiveTime::MIN);
    let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    local.checked_sub_signed(shift).unwrap_or(local).and_utc()
}

/// Data do calendário local que contém `instant`.
pub fn local_date(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kyiv() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    #[test]
    fn bounds_resolve_in_local_offset() {
        let window = Window::parse("2025-10-02", "2025-10-03", kyiv()).unwrap();
        assert_eq!(
            window.start(),
            Utc.with_ymd_and_hms(2025, 10, 1, 22, 0, 0).unwrap()
        );
        assert_eq!(
            window.end_exclusive(),
            Utc.with_ymd_and_hms(2025, 10, 3, 22, 0, 0).unwrap()
        );
        assert_eq!(
            window.end(),
            Utc.with_ymd_and_hms(2025, 10, 3, 21, 59, 59).unwrap() + TimeDelta::milliseconds(999)
        );
    }

    #[test]
    fn contains_is_half_open() {
        let window = Window::parse("2025-10-02", "2025-10-02", kyiv()).unwrap();
        assert!(window.contains(window.start()));
        assert!(window.contains(window.end()));
        assert!(!window.contains(window.end_exclusive()));
        assert!(!window.contains(window.start() - TimeDelta::milliseconds(1)));
    }

    #[test]
    fn days_are_inclusive() {
        let window = Window::parse("2025-10-30", "2025-11-02", kyiv()).unwrap();
        let days: Vec<String> = window.days().map(|d| d.to_string()).collect();
        assert_eq!(days, ["2025-10-30", "2025-10-31", "2025-11-01", "2025-11-02"]);
    }

    #[test]
    fn inverted_window_has_no_days() {
        let window = Window::parse("2025-10-05", "2025-10-01", kyiv()).unwrap();
        assert!(window.is_empty());
        assert_eq!(window.days().count(), 0);
    }

    #[test]
    fn missing_and_invalid_dates_are_reported() {
        assert_eq!(
            Window::parse("", "2025-10-01", kyiv()),
            Err(ValidationError::Missing("startDate"))
        );
        assert_eq!(
            Window::parse("2025-10-01", "  ", kyiv()),
            Err(ValidationError::Missing("endDate"))
        );
        assert_eq!(
            Window::parse("2025-13-01", "2025-10-01", kyiv()),
            Err(ValidationError::InvalidDate {
                field: "startDate",
                value: "2025-13-01".into()
            })
        );
    }

    #[test]
    fn local_date_crosses_midnight_before_utc() {
        let instant = Utc.with_ymd_and_hms(2025, 10, 9, 22, 30, 0).unwrap();
        assert_eq!(
            local_date(instant, kyiv()),
            NaiveDate::from_ymd_opt(2025, 10, 10).unwrap()
        );
    }
}
