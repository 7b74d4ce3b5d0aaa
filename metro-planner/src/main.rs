use metro_planner::config::AppConfig;
use metro_planner::predict::RandomSampler;
use metro_planner::service::MetroService;
use metro_planner::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let sampler = match config.seed {
        Some(seed) => RandomSampler::with_seed(seed),
        None => RandomSampler::new(),
    };

    // Serve immediately; queries answer 503 until loading completes
    let service = MetroService::new();
    let loader = service.clone();
    let timetable = config.timetable.clone();
    let predictions = config.predictions.clone();
    tokio::spawn(async move {
        if let Err(e) = loader
            .load(&timetable, predictions.as_ref(), sampler)
            .await
        {
            error!(error = %e, "metro data failed to load; route lookups are disabled");
        }
    });

    let app = create_router(AppState::new(service), &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    info!("Metro planner listening on http://{}", config.addr);
    info!("  GET /health           - Health check");
    info!("  GET /api/status       - Data load status");
    info!("  GET /api/lines        - Lines and stations");
    info!("  GET /api/route        - Next train (source, destination, time=HH:MM)");
    info!("  GET /api/diagnostics  - Prediction smoke test");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
}
