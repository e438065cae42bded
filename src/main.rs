use dotenvy::dotenv;
use school_attendance::{
    config::{seed, settings::Settings},
    core::{
        monthly::monthly_summary,
        report::{format_daily_report, format_month_grid, format_monthly_summary, format_records},
        view::{daily_view, month_grid, records_view},
    },
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Resolve runtime settings
    let settings = Settings::from_env()
        .inspect_err(|e| error!("Invalid attendance settings: {}", e))?;
    info!(
        config = ?settings.config_path,
        today = %settings.today,
        month = %settings.month,
        "Settings resolved"
    );

    // 4. Load the seed directory and ledger
    let state = seed::load_config(&settings.config_path)
        .and_then(seed::SeedConfig::into_state)
        .inspect_err(|e| error!("Failed to load seed data: {}", e))?;

    // 5. Render the views
    let query = settings.search.as_deref().unwrap_or("");
    let teachers = state.directory.search(query);

    let daily = daily_view(teachers.iter().copied(), &state.ledger, settings.today);
    println!("{}", format_daily_report(settings.today, &daily));

    let grid = month_grid(
        teachers.iter().copied(),
        &state.ledger,
        settings.month,
        settings.today,
        &state.weekends,
    );
    let grid_summary = monthly_summary(
        teachers.iter().copied(),
        &state.ledger,
        settings.month,
        &state.weekends,
    );
    println!("{}", format_month_grid(&grid, &grid_summary));

    // The summary card always covers the whole directory.
    let summary = monthly_summary(&state.directory, &state.ledger, settings.month, &state.weekends);
    println!("{}", format_monthly_summary(&summary));

    println!(
        "{}",
        format_records(&records_view(&state.directory, &state.ledger, query))
    );

    Ok(())
}
