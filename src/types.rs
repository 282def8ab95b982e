use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Estado da energia elétrica (máquina explícita de dois estados)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    On,
    Off,
}

/// Evento de mudança de estado ("energia voltou" / "energia caiu").
///
/// No arquivo de eventos o instante vem no campo `date` (RFC 3339). Campos extras
/// gravados pela camada de aquisição (`timestamp`, `id`, `text`) são ignorados.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    #[serde(rename = "date")]
    pub instant: DateTime<Utc>,
    pub status: Status,
}

impl Event {
    pub fn new(instant: DateTime<Utc>, status: Status) -> Self {
        Self { instant, status }
    }
}

/// Intervalo contínuo `[start, end)` com um único estado inferido
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: Status,
    #[serde(with = "duration_ms")]
    pub duration: TimeDelta,
}

impl Period {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, status: Status) -> Self {
        Self {
            start,
            end,
            status,
            duration: end - start,
        }
    }
}

/// Totais agregados de uma janela
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowSummary {
    #[serde(with = "duration_ms")]
    pub total_on_time: TimeDelta,
    #[serde(with = "duration_ms")]
    pub total_off_time: TimeDelta,
    pub percentage_on: f64,
    pub percentage_off: f64,
}

/// Acúmulo de tempo ligado/desligado de um dia do calendário local
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub date: NaiveDate,
    #[serde(with = "duration_ms")]
    pub on_time: TimeDelta,
    #[serde(with = "duration_ms")]
    pub off_time: TimeDelta,
    pub percentage_on: f64,
    pub percentage_off: f64,
    pub on_hours: f64,
    pub off_hours: f64,
}

/// Resposta de `calculate_statistics`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_events: usize,
    #[serde(with = "duration_ms")]
    pub total_on_time: TimeDelta,
    #[serde(with = "duration_ms")]
    pub total_off_time: TimeDelta,
    pub percentage_on: f64,
    pub percentage_off: f64,
    pub periods: Vec<Period>,
    pub events: Vec<Event>,
}

/// Resumo em horas de uma janela móvel (últimos N dias)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RangeDigest {
    pub on_hours: f64,
    pub off_hours: f64,
    pub percentage_on: f64,
    pub percentage_off: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Visão geral do histórico de eventos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_events: usize,
    pub on_events: usize,
    pub off_events: usize,
    pub first_event: Option<Event>,
    pub last_event: Option<Event>,
    pub date_range: Option<DateRange>,
    pub last_7_days: RangeDigest,
    pub last_30_days: RangeDigest,
}

/// Durações trafegam como milissegundos inteiros.
pub(crate) mod duration_ms {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_milliseconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        let ms = i64::deserialize(deserializer)?;
        Ok(TimeDelta::milliseconds(ms))
    }
}
