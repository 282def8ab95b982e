use anyhow::Result;
use chrono::Utc;
use estatisticas_energia::cache::CachedSource;
use estatisticas_energia::config::Config;
use estatisticas_energia::stats::StatsService;
use estatisticas_energia::storage::JsonFileStore;
use estatisticas_energia::window::local_date;
use serde_json::json;
use tracing::info;

/// Uso: `estatisticas_energia [startDate] [endDate]` (YYYY-MM-DD; padrão: hoje).
#[tokio::main]
async fn main() -> Result<()> {
    // Inicializa o sistema de logging (tracing)
    tracing_subscriber::fmt::init();

    let config = Config::load(Some("config"))?;
    config.validate()?;
    let offset = config.utc_offset()?;
    info!(
        "Configuração carregada: eventos em {}, UTC{:+}, cache de {}s",
        config.events_file.display(),
        config.utc_offset_hours,
        config.cache_ttl_secs
    );

    let source = CachedSource::new(JsonFileStore::new(&config.events_file), config.cache_ttl());
    let service = StatsService::new(source, offset);

    let today = local_date(Utc::now(), offset).format("%Y-%m-%d").to_string();
    let mut args = std::env::args().skip(1);
    let start_date = args.next().unwrap_or_else(|| today.clone());
    let end_date = args.next().unwrap_or(today);

    let statistics = service.calculate_statistics(&start_date, &end_date).await?;
    let daily = service.get_daily_statistics(&start_date, &end_date).await?;
    let summary = service.summary().await;

    let report = json!({
        "statistics": statistics,
        "daily": daily,
        "summary": summary,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
